use maud::{html, Markup};

use crate::domain::listing::Listing;
use crate::templates::components::fmt_opt;

/// One browse result. `rank` is 1-based.
pub fn listing_card(rank: usize, l: &Listing, currency: &str) -> Markup {
    html! {
        article class="listing" id=(format!("listing-{}", l.id)) {
            div class="listing-head" {
                h3 class="rainbow" { (rank) ") " (l.title()) }
                div class="listing-score" {
                    span class="score" { (fmt_opt(l.review_score)) " ⭐️" }
                    @if l.is_superhost() {
                        span class="superhost" { "🦸 I'm a superhost" }
                    }
                }
            }

            div class="listing-body" {
                div class="listing-side" {
                    p class="price" { "Price : " (l.price) " " (currency) }
                    @if let Some(url) = &l.picture_url {
                        img src=(url) alt=(l.name) width="210" loading="lazy";
                    }
                    @if let Some(date) = l.listed_on {
                        p class="muted" { "At Service From: " (date.format("%Y-%m-%d").to_string()) }
                    }
                }

                div class="listing-main" {
                    p class="ids" {
                        "Listing ID: " (l.id) " 🏨 , Host Name: "
                        (l.host_name.as_deref().unwrap_or("—"))
                        " 🧍 , Host id: "
                        (l.host_id.as_deref().unwrap_or("—"))
                    }

                    div class="money-row" {
                        div class="money-box" {
                            h4 { "Security Deposit" }
                            p { (fmt_opt(l.security_deposit)) " " (currency) }
                        }
                        div class="money-box" {
                            h4 { "Weekly Price & Monthly Price" }
                            p {
                                "for a Week: " (fmt_opt(l.weekly_price)) " " (currency)
                                " / for a Month " (fmt_opt(l.monthly_price)) " " (currency)
                            }
                        }
                    }

                    details {
                        summary { "Amenities 🖥️" }
                        p class="amenities" { (l.amenities_display()) }
                    }
                    details {
                        summary { "Description 🏨" }
                        p class="description" { (l.description.as_deref().unwrap_or("")) }
                    }
                }
            }
        }
    }
}
