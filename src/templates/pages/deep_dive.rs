use maud::{html, Markup};

use crate::domain::aggregate::CountryPrice;
use crate::templates::components::{area_chart, card, ChartPoint};

pub fn deep_dive_panel(prices: &[CountryPrice]) -> Markup {
    let points: Vec<ChartPoint> = prices
        .iter()
        .map(|p| ChartPoint {
            label: p.country.clone(),
            value: p.mean_price,
        })
        .collect();

    html! {
        section class="panel-body" {
            (card("Country Wise Price", html! {
                (area_chart(&points, 260, "#FF3396"))
                table class="plain-table" {
                    thead { tr { th { "Country" } th { "Mean price" } } }
                    tbody {
                        @for p in prices {
                            tr { td { (p.country) } td { (format!("{:.2}", p.mean_price)) } }
                        }
                    }
                }
            }))

            // Comments are only fetched once the panel is opened.
            details
                id="comments"
                hx-get="/comments"
                hx-trigger="toggle once"
                hx-target="#comments-body"
                hx-swap="innerHTML"
            {
                summary { "See what our customers say about us" }
                div id="comments-body" {
                    noscript { a href="/comments" { "Load comments" } }
                }
            }
        }
    }
}
