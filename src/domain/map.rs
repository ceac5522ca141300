use maud::html;
use serde::Serialize;

use crate::domain::listing::{Listing, ListingSet};
use crate::errors::ServerError;
use crate::templates::components::fmt_opt;

/// What the browser-side map script consumes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapView {
    /// `[lat, lon]`
    pub center: [f64; 2],
    pub zoom: u8,
    pub markers: Vec<Marker>,
    /// Every coordinate in fetch order, drawn as an animated line.
    pub path: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub lat: f64,
    pub lon: f64,
    /// Pre-rendered, escaped HTML.
    pub popup: String,
}

pub const DEFAULT_ZOOM: u8 = 5;

/// Builds the map over every listing (not the browse result). Fails if the
/// fetch didn't return coordinate columns or any row lacks a coordinate.
pub fn build_map_view(set: &ListingSet) -> Result<MapView, ServerError> {
    for col in ["latitude", "longitude"] {
        if !set.has_column(col) {
            return Err(ServerError::MissingColumn(format!(
                "Latitude and Longitude columns are missing in the data ({col} not fetched)."
            )));
        }
    }

    let mut coords = Vec::with_capacity(set.len());
    for l in &set.listings {
        match (l.latitude, l.longitude) {
            (Some(lat), Some(lon)) => coords.push([lat, lon]),
            (None, _) => return Err(missing_value("latitude", l)),
            (_, None) => return Err(missing_value("longitude", l)),
        }
    }

    let center = if set.is_empty() {
        [0.0, 0.0]
    } else {
        let lats: Vec<f64> = coords.iter().map(|c| c[0]).collect();
        let lons: Vec<f64> = coords.iter().map(|c| c[1]).collect();
        match (median(&lats), median(&lons)) {
            (Some(lat), Some(lon)) => [lat, lon],
            _ => [0.0, 0.0],
        }
    };

    let markers = set
        .listings
        .iter()
        .zip(&coords)
        .map(|(l, c)| Marker {
            lat: c[0],
            lon: c[1],
            popup: popup_html(l),
        })
        .collect();

    Ok(MapView {
        center,
        zoom: DEFAULT_ZOOM,
        markers,
        path: coords,
    })
}

fn missing_value(col: &str, l: &Listing) -> ServerError {
    ServerError::MissingColumn(format!(
        "Latitude and Longitude columns are missing in the data ({col} is empty for listing {}).",
        l.id
    ))
}

/// Middle value; the mean of the two middle values for even counts.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

fn popup_html(l: &Listing) -> String {
    html! {
        b { (l.name) } br;
        "Price: " (l.price) br;
        "Review Score: " (fmt_opt(l.review_score)) " ⭐️" br;
        "Country: " (l.country) br;
        "Monthly Price: " (fmt_opt(l.monthly_price)) br;
        @if let Some(url) = &l.picture_url {
            a href=(url) target="_blank" rel="noopener" { "View Hotel" }
        }
    }
    .into_string()
}
