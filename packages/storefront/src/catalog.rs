//! The product list the storefront renders.

use std::collections::HashSet;
use std::rc::Rc;

use product_card::Product;
use thiserror::Error;

const EMBEDDED: &str = include_str!("../assets/catalog.json");

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("product id `{0}` appears more than once")]
    DuplicateId(String),

    #[error("product `{id}` has an invalid price {price}")]
    InvalidPrice { id: String, price: f64 },
}

/// A validated, immutable list of products. Cheap to clone.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    products: Rc<[Product]>,
}

impl Catalog {
    /// Parse a JSON array of products.
    ///
    /// Ids must be unique and prices finite and non-negative. Ratings are not
    /// checked; the card clamps them when drawing stars.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let products: Vec<Product> = serde_json::from_str(json)?;

        {
            let mut seen = HashSet::new();
            for product in &products {
                if !seen.insert(product.id.as_str()) {
                    return Err(CatalogError::DuplicateId(product.id.clone()));
                }
                if !product.price.is_finite() || product.price < 0.0 {
                    return Err(CatalogError::InvalidPrice {
                        id: product.id.clone(),
                        price: product.price,
                    });
                }
            }
        }

        tracing::debug!(count = products.len(), "loaded catalog");
        Ok(Self {
            products: products.into(),
        })
    }

    /// The catalog bundled with the binary.
    pub fn embedded() -> Result<Self, CatalogError> {
        Self::from_json(EMBEDDED)
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn get(&self, id: &str) -> Option<&Product> {
        self.products.iter().find(|product| product.id == id)
    }
}
