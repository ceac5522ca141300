use maud::{html, Markup};

use crate::domain::filter::{currency_for, BrowseResult, FilterState};
use crate::templates::components::{area_chart, listing_card, ChartPoint};

pub struct BrowseVm<'a> {
    pub countries: &'a [String],
    pub filter: &'a FilterState,
    pub result: &'a BrowseResult<'a>,
    /// Query string that reproduces this result, for the export link.
    pub query: &'a str,
}

pub fn browse_panel(vm: &BrowseVm) -> Markup {
    let currency = currency_for(&vm.filter.country);
    let slider_max = vm.result.slider_max.ceil();
    let ceiling = vm.filter.price_ceiling.min(slider_max);

    let chart: Vec<ChartPoint> = vm
        .result
        .listings
        .iter()
        .map(|l| ChartPoint {
            label: l.title(),
            value: l.price,
        })
        .collect();

    html! {
        section class="panel-body" {
            form class="filters" method="get" action="/" {
                input type="hidden" name="tab" value="browse";

                label for="country" { "Select the Location" }
                // A new country starts without the old ceiling.
                select
                    name="country"
                    id="country"
                    onchange="this.form.max_price.disabled = true; this.form.submit()"
                {
                    @for c in vm.countries {
                        option value=(c) selected[*c == vm.filter.country] { (c) }
                    }
                }

                label class="toggle budget" {
                    input type="checkbox" name="budget" value="on" checked[vm.filter.mode.is_budget()];
                    " Budget"
                }
                label class="toggle highclass" {
                    input type="checkbox" name="highclass" value="on" checked[vm.filter.mode.is_highclass()];
                    " High Class"
                }

                label for="max_price" { "Price Range" }
                input
                    type="range"
                    id="max_price"
                    name="max_price"
                    min="0"
                    max=(slider_max)
                    step="1"
                    value=(ceiling)
                    oninput="this.nextElementSibling.value = this.value";
                output { (ceiling) }

                button type="submit" { "Apply" }
                a class="export" href=(format!("/export?{}", vm.query)) { "Download .xlsx" }
            }

            p class="total" {
                "Total listings available in this location: "
                strong { (vm.result.count) }
            }

            @if vm.result.count > 0 {
                (area_chart(&chart, 180, "#c6072d"))
            }

            @for (i, l) in vm.result.listings.iter().enumerate() {
                (listing_card(i + 1, l, currency))
            }
        }
    }
}
