use serde::{Deserialize, Serialize};

/// The record a [`ProductCard`](crate::ProductCard) renders.
///
/// Owned by whoever fetched it. The card never mutates it and only clones it
/// back out through `on_add_to_cart`.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    pub id: String,
    pub name: String,
    /// Price in major currency units. Expected to be non-negative.
    pub price: f64,
    /// URI of the product image.
    pub image: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    /// Average rating, expected in `0.0..=5.0`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reviews: Option<u32>,
}
