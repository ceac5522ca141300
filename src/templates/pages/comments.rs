use maud::{html, Markup};

use crate::domain::review::Review;
use crate::templates::components::review_item;

/// Partial swapped into the comments panel.
pub fn comments_fragment(reviews: &[Review]) -> Markup {
    html! {
        div class="reviews" {
            @if reviews.is_empty() {
                p class="muted" { "No reviews yet." }
            }
            @for (i, r) in reviews.iter().enumerate() {
                (review_item(i + 1, r))
            }
        }
    }
}
