//! The star rating row.

use dioxus::prelude::*;

use crate::icons::StarIcon;
use crate::price::format_count;

/// Number of star units in a rating row.
pub const MAX_STARS: usize = 5;

/// How many stars a rating fills: its integer floor, clamped to
/// `0..=MAX_STARS`. NaN fills none.
pub fn filled_stars(rating: f64) -> usize {
    clamp_rating(rating).floor() as usize
}

/// The rating as the row presents it: within `0..=MAX_STARS`, NaN as zero.
fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return 0.0;
    }
    rating.clamp(0.0, MAX_STARS as f64)
}

/// Five stars with the first `floor(rating)` filled, followed by the review
/// count in parentheses when one is known.
#[component]
pub fn StarRating(rating: f64, reviews: Option<u32>) -> Element {
    let filled = filled_stars(rating);
    let label = format!("Rated {} out of {MAX_STARS}", clamp_rating(rating));
    let reviews = reviews.map(format_count);

    rsx! {
        div { class: "product-card__rating",
            div { class: "product-card__stars", role: "img", aria_label: label,
                for index in 0..MAX_STARS {
                    StarIcon { key: "{index}", filled: index < filled }
                }
            }
            if let Some(reviews) = reviews {
                span { class: "product-card__reviews", "({reviews})" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_fractional_ratings() {
        assert_eq!(filled_stars(0.0), 0);
        assert_eq!(filled_stars(0.99), 0);
        assert_eq!(filled_stars(3.0), 3);
        assert_eq!(filled_stars(4.6), 4);
        assert_eq!(filled_stars(5.0), 5);
    }

    #[test]
    fn every_rating_in_range_fills_its_floor() {
        for tenths in 0..=50 {
            let rating = f64::from(tenths) / 10.0;
            assert_eq!(filled_stars(rating), (tenths / 10) as usize, "rating {rating}");
        }
    }

    #[test]
    fn out_of_range_ratings_are_clamped() {
        assert_eq!(filled_stars(-2.5), 0);
        assert_eq!(filled_stars(7.0), MAX_STARS);
        assert_eq!(filled_stars(f64::INFINITY), MAX_STARS);
        assert_eq!(filled_stars(f64::NAN), 0);
    }

    fn render(app: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(app);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn renders_filled_then_empty_stars() {
        let html = render(|| rsx! {
            StarRating { rating: 3.7, reviews: Some(1204) }
        });

        assert_eq!(html.matches("is-filled").count(), 3);
        assert_eq!(html.matches("is-empty").count(), 2);
        assert!(html.find("is-filled") < html.find("is-empty"));
        assert!(html.contains("(1,204)"));
    }

    #[test]
    fn review_count_is_omitted_when_unknown() {
        let html = render(|| rsx! {
            StarRating { rating: 2.0 }
        });

        assert!(!html.contains("product-card__reviews"));
        assert_eq!(html.matches("is-filled").count(), 2);
    }

    #[test]
    fn label_matches_the_stars_drawn() {
        let html = render(|| rsx! { StarRating { rating: 3.5 } });
        assert!(html.contains(r#"aria-label="Rated 3.5 out of 5""#));

        let html = render(|| rsx! { StarRating { rating: 7.0 } });
        assert!(html.contains(r#"aria-label="Rated 5 out of 5""#));
        assert_eq!(html.matches("is-filled").count(), 5);

        let html = render(|| rsx! { StarRating { rating: -1.0 } });
        assert!(html.contains(r#"aria-label="Rated 0 out of 5""#));

        let html = render(|| rsx! { StarRating { rating: f64::NAN } });
        assert!(html.contains(r#"aria-label="Rated 0 out of 5""#));
        assert!(!html.contains("NaN"));
    }
}
