use dioxus::prelude::*;

use crate::config::{use_card_config, CardConfig};
use crate::icons::{CartIcon, EyeIcon, HeartIcon};
use crate::price::format_price;
use crate::product::Product;
use crate::rating::StarRating;
use crate::state::{use_card_state, CardState};

/// A storefront card for one [`Product`].
///
/// The image and the title link to the product's detail route (see
/// [`CardConfig::detail_path`]), so the card has to live below a `Router`.
/// Until the image fires `load` a pulsing placeholder covers the media area.
///
/// Regions for `category`, `rating` and `reviews` are left out entirely when
/// the product has no value for them.
///
/// The card does not touch any cart. Both add-to-cart affordances forward the
/// product to `on_add_to_cart` and do nothing when it is not set.
#[component]
pub fn ProductCard(
    /// The product to display.
    product: Product,
    /// Called with a clone of `product` when an add-to-cart control is clicked.
    on_add_to_cart: Option<EventHandler<Product>>,
) -> Element {
    let state = use_card_state();
    let config = use_card_config();

    card_markup(&product, state, &config, on_add_to_cart)
}

pub(crate) fn card_markup(
    product: &Product,
    state: CardState,
    config: &CardConfig,
    on_add_to_cart: Option<EventHandler<Product>>,
) -> Element {
    let liked = state.liked();
    let loaded = state.image_loaded();

    let detail = config.detail_path(&product.id);
    let price = format_price(product.price, &config.currency);
    let name = product.name.clone();
    let image = product.image.clone();
    let category = product.category.clone();
    let rating = product.rating;
    let reviews = product.reviews;

    let image_class = if loaded {
        "product-card__image product-card__image--loaded"
    } else {
        "product-card__image"
    };
    let (like_class, like_label) = if liked {
        ("product-card__like product-card__like--active", "Remove from wishlist")
    } else {
        ("product-card__like", "Add to wishlist")
    };

    let mut like_state = state;
    let like_id = product.id.clone();
    let on_like = move |evt: MouseEvent| {
        // the button sits over the media link
        evt.prevent_default();
        evt.stop_propagation();
        like_state.toggle_like();
        tracing::debug!(product = %like_id, liked = like_state.liked(), "toggled like");
    };

    let mut load_state = state;
    let load_id = product.id.clone();
    let on_image_load = move |_: Event<ImageData>| {
        load_state.mark_image_loaded();
        tracing::debug!(product = %load_id, "image loaded");
    };

    let add_to_cart = {
        let product = product.clone();
        move |evt: MouseEvent| {
            evt.stop_propagation();
            tracing::debug!(product = %product.id, "add to cart");
            if let Some(handler) = on_add_to_cart {
                handler.call(product.clone());
            }
        }
    };

    rsx! {
        article { class: "product-card",
            div { class: "product-card__media",
                Link { to: detail.clone(), class: "product-card__media-link",
                    if !loaded {
                        div { class: "product-card__placeholder", "aria-hidden": "true" }
                    }
                    img {
                        class: image_class,
                        src: image,
                        alt: name.clone(),
                        onload: on_image_load,
                    }
                }
                if let Some(category) = category {
                    span { class: "product-card__badge", "{category}" }
                }
                button {
                    r#type: "button",
                    class: like_class,
                    aria_pressed: "{liked}",
                    aria_label: like_label,
                    onclick: on_like,
                    HeartIcon { filled: liked }
                }
                div { class: "product-card__overlay",
                    button {
                        r#type: "button",
                        class: "product-card__overlay-action",
                        aria_label: "Add to cart",
                        onclick: add_to_cart.clone(),
                        CartIcon {}
                    }
                    Link { to: detail.clone(), class: "product-card__overlay-action",
                        EyeIcon {}
                        span { class: "sr-only", "View details" }
                    }
                }
            }
            div { class: "product-card__body",
                Link { to: detail, class: "product-card__title-link",
                    h3 { class: "product-card__title", "{name}" }
                }
                if let Some(rating) = rating {
                    StarRating { rating, reviews }
                }
                div { class: "product-card__footer",
                    span { class: "product-card__price", "{price}" }
                    button {
                        r#type: "button",
                        class: "product-card__add-to-cart",
                        onclick: add_to_cart,
                        CartIcon {}
                        "Add to Cart"
                    }
                }
            }
        }
    }
}
