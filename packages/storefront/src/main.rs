//! A small storefront: a grid of product cards and a detail page per product.
//!
//! Run with:
//!
//! ```sh
//! dx serve --package storefront
//! ```

use dioxus::logger::tracing::Level;
use dioxus::prelude::*;
use product_card::prelude::*;
use product_card::{format_price, StarRating};

mod catalog;

use catalog::Catalog;

const STOREFRONT_CSS: Asset = asset!("/assets/storefront.css");

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[derive(Routable, Clone, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(NavBar)]
        #[route("/")]
        Home {},
        #[route("/product/:id")]
        ProductDetail { id: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

/// Items added this session. Not persisted.
#[derive(Clone, Copy)]
struct Cart {
    count: Signal<usize>,
}

impl Cart {
    fn add(&mut self, product: &Product) {
        *self.count.write() += 1;
        tracing::info!(product = %product.id, total = *self.count.peek(), "added to cart");
    }
}

#[component]
fn App() -> Element {
    let catalog = use_hook(|| {
        Catalog::embedded().map_err(|err| {
            tracing::error!(%err, "could not load the catalog");
            err.to_string()
        })
    });

    let body = match catalog {
        Ok(catalog) => rsx! { Shop { catalog } },
        Err(message) => rsx! {
            section { class: "storefront-error",
                h1 { "The shop is closed" }
                p { "{message}" }
            }
        },
    };

    rsx! {
        Stylesheet { href: PRODUCT_CARD_CSS }
        Stylesheet { href: STOREFRONT_CSS }
        {body}
    }
}

#[component]
fn Shop(catalog: Catalog) -> Element {
    use_context_provider(|| catalog);
    use_context_provider(CardConfig::default);
    use_context_provider(|| Cart {
        count: Signal::new(0),
    });

    rsx! { Router::<Route> {} }
}

#[component]
fn NavBar() -> Element {
    let cart = use_context::<Cart>();
    let count = (cart.count)();

    rsx! {
        header { class: "storefront-nav",
            Link { to: Route::Home {}, class: "storefront-nav__brand", "Storefront" }
            span { class: "storefront-nav__cart", "Cart ({count})" }
        }
        main { class: "storefront-main", Outlet::<Route> {} }
    }
}

#[component]
fn Home() -> Element {
    let catalog = use_context::<Catalog>();
    let mut cart = use_context::<Cart>();

    rsx! {
        section { class: "storefront-grid",
            for product in catalog.products().iter().cloned() {
                ProductCard {
                    key: "{product.id}",
                    product: product.clone(),
                    on_add_to_cart: move |product: Product| cart.add(&product),
                }
            }
        }
    }
}

#[component]
fn ProductDetail(id: String) -> Element {
    let catalog = use_context::<Catalog>();
    let config = use_card_config();
    let mut cart = use_context::<Cart>();

    let Some(product) = catalog.get(&id).cloned() else {
        tracing::warn!(%id, "unknown product");
        return rsx! {
            section { class: "storefront-missing",
                h1 { "No such product" }
                Link { to: Route::Home {}, "Back to the shop" }
            }
        };
    };

    let name = product.name.clone();
    let image = product.image.clone();
    let category = product.category.clone();
    let rating = product.rating;
    let reviews = product.reviews;
    let price = format_price(product.price, &config.currency);

    rsx! {
        article { class: "storefront-detail",
            img { class: "storefront-detail__image", src: image, alt: name.clone() }
            div { class: "storefront-detail__info",
                if let Some(category) = category {
                    span { class: "product-card__badge", "{category}" }
                }
                h1 { "{name}" }
                if let Some(rating) = rating {
                    StarRating { rating, reviews }
                }
                p { class: "product-card__price", "{price}" }
                button {
                    r#type: "button",
                    class: "product-card__add-to-cart",
                    onclick: move |_| cart.add(&product),
                    "Add to Cart"
                }
                Link { to: Route::Home {}, "Back to the shop" }
            }
        }
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");

    rsx! {
        section { class: "storefront-missing",
            h1 { "Page not found" }
            p { "Nothing lives at /{path}." }
            Link { to: Route::Home {}, "Back to the shop" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus_history::{History, MemoryHistory};
    use pretty_assertions::assert_eq;
    use std::rc::Rc;

    #[test]
    fn home_lists_every_product_in_catalog_order() {
        let mut dom = VirtualDom::new(|| {
            let catalog = use_hook(|| Catalog::embedded().unwrap());
            rsx! { Shop { catalog } }
        });
        let history: Rc<dyn History> = Rc::new(MemoryHistory::default());
        dom.provide_root_context(history);
        dom.rebuild_in_place();
        let html = dioxus_ssr::render(&dom);

        let catalog = Catalog::embedded().unwrap();
        assert_eq!(
            html.matches(r#"class="product-card""#).count(),
            catalog.products().len()
        );
        let positions: Vec<usize> = catalog
            .products()
            .iter()
            .map(|product| html.find(product.name.as_str()).expect("card rendered"))
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
        assert!(html.contains("Cart (0)"));
    }

    #[test]
    fn card_links_resolve_to_the_detail_route() {
        let config = CardConfig::default();

        for product in Catalog::embedded().unwrap().products() {
            let path = config.detail_path(&product.id);
            let route: Route = path.parse().unwrap();
            assert_eq!(
                route,
                Route::ProductDetail {
                    id: product.id.clone()
                }
            );
        }
    }

    #[test]
    fn unknown_paths_fall_through() {
        let route: Route = "/checkout/step-2".parse().unwrap();
        assert_eq!(
            route,
            Route::NotFound {
                segments: vec!["checkout".into(), "step-2".into()]
            }
        );
    }
}
