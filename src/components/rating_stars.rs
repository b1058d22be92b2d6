//! Rating Stars Component

use leptos::prelude::*;

/// Icon for star `position` (1-based) under `rating`.
pub fn star_icon(position: u32, rating: f32) -> &'static str {
    let position = position as f32;
    if position <= rating.floor() {
        "ri-star-fill"
    } else if position - 0.5 <= rating {
        "ri-star-half-fill"
    } else {
        "ri-star-line"
    }
}

/// Five-star rating row
#[component]
pub fn RatingStars(rating: f32) -> impl IntoView {
    view! {
        <span class="stars">
            {(1..=5).map(|position| view! {
                <i class=star_icon(position, rating)></i>
            }).collect_view()}
        </span>
    }
}

#[cfg(test)]
mod tests {
    use super::star_icon;

    #[test]
    fn test_half_star_rating() {
        let icons: Vec<_> = (1..=5).map(|i| star_icon(i, 3.5)).collect();
        assert_eq!(
            icons,
            [
                "ri-star-fill",
                "ri-star-fill",
                "ri-star-fill",
                "ri-star-half-fill",
                "ri-star-line",
            ]
        );
    }

    #[test]
    fn test_whole_number_rating() {
        assert_eq!(star_icon(4, 4.0), "ri-star-fill");
        assert_eq!(star_icon(5, 4.0), "ri-star-line");
    }

    #[test]
    fn test_zero_rating() {
        assert!((1..=5).all(|i| star_icon(i, 0.0) == "ri-star-line"));
    }
}
