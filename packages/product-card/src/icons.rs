//! Inline 24x24 stroke icons used by the card.

use dioxus::prelude::*;

#[component]
pub fn HeartIcon(filled: bool) -> Element {
    let fill = if filled { "currentColor" } else { "none" };

    rsx! {
        svg {
            class: "icon icon-heart",
            fill,
            stroke: "currentColor",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            stroke_width: "2",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path { d: "M20.84 4.61a5.5 5.5 0 0 0-7.78 0L12 5.67l-1.06-1.06a5.5 5.5 0 0 0-7.78 7.78l1.06 1.06L12 21.23l7.78-7.78 1.06-1.06a5.5 5.5 0 0 0 0-7.78z" }
        }
    }
}

/// One unit of a rating row. Carries `is-filled` or `is-empty`.
#[component]
pub fn StarIcon(filled: bool) -> Element {
    let (class, fill) = if filled {
        ("icon product-card__star is-filled", "currentColor")
    } else {
        ("icon product-card__star is-empty", "none")
    };

    rsx! {
        svg {
            class,
            fill,
            stroke: "currentColor",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            stroke_width: "2",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            polygon { points: "12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2" }
        }
    }
}

#[component]
pub fn CartIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-cart",
            fill: "none",
            stroke: "currentColor",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            stroke_width: "2",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            circle { cx: "9", cy: "21", r: "1" }
            circle { cx: "20", cy: "21", r: "1" }
            path { d: "M1 1h4l2.68 13.39a2 2 0 0 0 2 1.61h9.72a2 2 0 0 0 2-1.61L23 6H6" }
        }
    }
}

#[component]
pub fn EyeIcon() -> Element {
    rsx! {
        svg {
            class: "icon icon-eye",
            fill: "none",
            stroke: "currentColor",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            stroke_width: "2",
            view_box: "0 0 24 24",
            "aria-hidden": "true",
            path { d: "M1 12s4-8 11-8 11 8 11 8-4 8-11 8-11-8-11-8z" }
            circle { cx: "12", cy: "12", r: "3" }
        }
    }
}
