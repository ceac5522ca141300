use maud::{html, Markup};

use crate::templates::desktop_layout;
use crate::templates::pages::browse::{browse_panel, BrowseVm};
use crate::templates::pages::deep_dive::deep_dive_panel;
use crate::templates::pages::locate::{locate_panel, LocateVm};
use crate::domain::aggregate::CountryPrice;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Browse,
    Locate,
    DeepDive,
}

impl Tab {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "browse" => Some(Tab::Browse),
            "locate" => Some(Tab::Locate),
            "deep-dive" => Some(Tab::DeepDive),
            _ => None,
        }
    }

    fn id(self) -> &'static str {
        match self {
            Tab::Browse => "browse",
            Tab::Locate => "locate",
            Tab::DeepDive => "deep-dive",
        }
    }

    fn label(self) -> &'static str {
        match self {
            Tab::Browse => "Where - Search Destination",
            Tab::Locate => "Locate Us 📍",
            Tab::DeepDive => "Deep-Dive 🤿",
        }
    }
}

pub struct DashboardVm<'a> {
    pub logo_url: Option<&'a str>,
    pub active: Tab,
    pub browse: BrowseVm<'a>,
    pub locate: LocateVm<'a>,
    pub country_prices: &'a [CountryPrice],
}

pub fn dashboard_page(vm: &DashboardVm) -> Markup {
    let tabs = [Tab::Browse, Tab::Locate, Tab::DeepDive];

    desktop_layout(
        "Rental Listings",
        vm.logo_url,
        html! {
            main class="container tabs" {
                // Radio inputs drive the tab switching in CSS; every panel is
                // rendered so a failing one never hides the others.
                @for t in tabs {
                    input
                        type="radio"
                        name="tab-switch"
                        class="tab-radio"
                        id=(format!("tab-{}", t.id()))
                        checked[t == vm.active];
                }
                nav class="tab-labels" {
                    @for t in tabs {
                        label for=(format!("tab-{}", t.id())) { (t.label()) }
                    }
                }

                div class="panel" id="panel-browse" { (browse_panel(&vm.browse)) }
                div class="panel" id="panel-locate" { (locate_panel(&vm.locate)) }
                div class="panel" id="panel-deep-dive" { (deep_dive_panel(vm.country_prices)) }
            }
        },
    )
}
