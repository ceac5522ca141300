// src/domain/filter.rs

use std::cmp::Ordering;

use crate::domain::listing::Listing;

/// Price band relative to the mean price of the selected country.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FilterMode {
    #[default]
    All,
    /// Strictly below the mean.
    Budget,
    /// Strictly above the mean.
    HighClass,
}

impl FilterMode {
    /// Collapses the two checkboxes into one mode. When both are ticked,
    /// budget wins; that precedence is kept on purpose so existing links
    /// behave the same.
    pub fn from_toggles(budget: bool, highclass: bool) -> Self {
        if budget {
            FilterMode::Budget
        } else if highclass {
            FilterMode::HighClass
        } else {
            FilterMode::All
        }
    }

    pub fn is_budget(self) -> bool {
        self == FilterMode::Budget
    }

    pub fn is_highclass(self) -> bool {
        self == FilterMode::HighClass
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FilterState {
    pub country: String,
    pub mode: FilterMode,
    /// `0.0` means no ceiling.
    pub price_ceiling: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BrowseResult<'a> {
    pub listings: Vec<&'a Listing>,
    pub count: usize,
    /// Upper bound for the price slider: the highest price left after the
    /// mode filter, or `0.0` when nothing is left.
    pub slider_max: f64,
}

/// Country subset, ranked by review score (best first). Ties keep fetch
/// order and listings without a score go last.
pub fn rank_by_country<'a>(listings: &'a [Listing], country: &str) -> Vec<&'a Listing> {
    let mut subset: Vec<&Listing> = listings.iter().filter(|l| l.country == country).collect();
    subset.sort_by(|a, b| cmp_score_desc(a.review_score, b.review_score));
    subset
}

fn cmp_score_desc(a: Option<f64>, b: Option<f64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => b.total_cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

pub fn mean_price(listings: &[&Listing]) -> Option<f64> {
    if listings.is_empty() {
        return None;
    }
    let total: f64 = listings.iter().map(|l| l.price).sum();
    Some(total / listings.len() as f64)
}

pub fn max_price(listings: &[&Listing]) -> f64 {
    listings.iter().map(|l| l.price).fold(None, |acc: Option<f64>, p| {
        Some(acc.map_or(p, |m| m.max(p)))
    })
    .unwrap_or(0.0)
}

/// The browse tab pipeline: country subset, rank, price band, ceiling.
pub fn browse<'a>(listings: &'a [Listing], state: &FilterState) -> BrowseResult<'a> {
    let ranked = rank_by_country(listings, &state.country);

    let banded: Vec<&Listing> = match (state.mode, mean_price(&ranked)) {
        (FilterMode::Budget, Some(mean)) => ranked.into_iter().filter(|l| l.price < mean).collect(),
        (FilterMode::HighClass, Some(mean)) => {
            ranked.into_iter().filter(|l| l.price > mean).collect()
        }
        _ => ranked,
    };

    let slider_max = max_price(&banded);

    let out: Vec<&Listing> = if state.price_ceiling > 0.0 {
        banded
            .into_iter()
            .filter(|l| l.price < state.price_ceiling)
            .collect()
    } else {
        banded
    };

    BrowseResult {
        count: out.len(),
        listings: out,
        slider_max,
    }
}

/// Display currency for a country's prices. Unknown countries show USD.
pub fn currency_for(country: &str) -> &'static str {
    match country {
        "Canada" => "CAD",
        "Turkey" => "TRY",
        "Spain" => "EUR",
        "Brazil" => "BRL",
        "Australia" => "AUD",
        "Hong Kong" => "HKD",
        "United States" => "USD",
        _ => "USD",
    }
}
