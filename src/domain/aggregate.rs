use std::collections::{BTreeMap, BTreeSet};

use crate::domain::listing::Listing;

#[derive(Debug, Clone, PartialEq)]
pub struct CountryPrice {
    pub country: String,
    pub mean_price: f64,
}

/// Mean price per country over every listing passed in, ordered by country.
pub fn mean_price_by_country(listings: &[Listing]) -> Vec<CountryPrice> {
    let mut sums: BTreeMap<&str, (f64, usize)> = BTreeMap::new();
    for l in listings {
        let entry = sums.entry(l.country.as_str()).or_insert((0.0, 0));
        entry.0 += l.price;
        entry.1 += 1;
    }

    sums.into_iter()
        .map(|(country, (total, n))| CountryPrice {
            country: country.to_string(),
            mean_price: total / n as f64,
        })
        .collect()
}

/// Sorted unique non-empty values of one field, e.g. host locations.
pub fn distinct_sorted<'a, F>(listings: &'a [Listing], field: F) -> Vec<&'a str>
where
    F: Fn(&'a Listing) -> Option<&'a str>,
{
    listings
        .iter()
        .filter_map(field)
        .filter(|s| !s.trim().is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
