use maud::{html, Markup};

use crate::templates::components::fmt_opt;
use crate::domain::review::Review;

pub fn review_item(rank: usize, r: &Review) -> Markup {
    html! {
        article class="review" {
            div class="review-head" {
                h3 class="rainbow" { (rank) ") " (r.reviewer_title()) }
                span class="score" { (fmt_opt(r.rating)) " ⭐️" }
            }
            p class="muted" { "Posted on: " (r.posted_on.as_deref().unwrap_or("—")) }
            p class="place" { (r.place()) }
            blockquote { (r.comments) }
        }
    }
}
