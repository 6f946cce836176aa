//! Storefront-wide settings the card reads from context.

use dioxus::prelude::*;
use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// Characters that cannot appear raw inside a single path segment.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// How prices are displayed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Currency {
    pub symbol: String,
    /// Number of minor-unit digits shown after the decimal point.
    pub decimals: u8,
}

impl Default for Currency {
    fn default() -> Self {
        Self {
            symbol: "$".to_string(),
            decimals: 2,
        }
    }
}

/// Settings shared by every card below the provider.
///
/// Install one with `use_context_provider(|| CardConfig { .. })`. Cards
/// without a provider above them use [`CardConfig::default`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardConfig {
    pub currency: Currency,
    /// Route prefix of the product detail page, e.g. `/product`.
    pub detail_base: String,
}

impl Default for CardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            detail_base: "/product".to_string(),
        }
    }
}

impl CardConfig {
    /// The detail route for the product with `id`.
    ///
    /// ```rust
    /// use product_card::CardConfig;
    ///
    /// let config = CardConfig::default();
    /// assert_eq!(config.detail_path("42"), "/product/42");
    /// assert_eq!(config.detail_path("a/b c"), "/product/a%2Fb%20c");
    /// ```
    pub fn detail_path(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.detail_base.trim_end_matches('/'),
            utf8_percent_encode(id, SEGMENT)
        )
    }
}

/// Read the nearest [`CardConfig`], falling back to the default.
pub fn use_card_config() -> CardConfig {
    try_use_context::<CardConfig>().unwrap_or_default()
}
