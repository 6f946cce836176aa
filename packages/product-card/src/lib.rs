#![doc = include_str!("../README.md")]
#![allow(non_snake_case)]

use dioxus::prelude::*;

mod card;
pub mod config;
pub mod icons;
pub mod price;
mod product;
pub mod rating;
pub mod state;

pub use card::ProductCard;
pub use config::{use_card_config, CardConfig, Currency};
pub use price::{format_count, format_price};
pub use product::Product;
pub use rating::{filled_stars, StarRating, MAX_STARS};
pub use state::{use_card_state, CardState};

/// The stylesheet the card's class names are written against.
pub const PRODUCT_CARD_CSS: Asset = asset!("/assets/product-card.css");

/// A collection of useful items most applications might need.
pub mod prelude {
    pub use crate::card::ProductCard;
    pub use crate::config::{use_card_config, CardConfig, Currency};
    pub use crate::product::Product;
    pub use crate::PRODUCT_CARD_CSS;
}
