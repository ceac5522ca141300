//! The three fixed queries the dashboard runs, and the business rules baked
//! into them. The whitelist and the row caps decide which data is visible at
//! all, so they live here as named constants rather than inside SQL strings.

use tracing::info;

use crate::db::connection::Database;
use crate::db::table::{fetch, Query};
use crate::domain::listing::ListingSet;
use crate::domain::review::{reviews_from_table, Review};
use crate::errors::ServerError;

/// Only these countries are ever shown.
pub const COUNTRY_WHITELIST: [&str; 9] = [
    "China",
    "Turkey",
    "Spain",
    "Brazil",
    "Australia",
    "Hong Kong",
    "Canada",
    "Portugal",
    "United States",
];

/// Page size used for the country catalog. Far above the whitelist size.
pub const COUNTRIES_LIMIT: i64 = 1000;

/// Rows prefetched for every page load.
pub const PREFETCH_LISTINGS_LIMIT: i64 = 500;

/// Comments panel cap. There is no offset control for reviews.
pub const REVIEWS_LIMIT: i64 = 25;

fn whitelist_placeholders() -> String {
    vec!["?"; COUNTRY_WHITELIST.len()].join(", ")
}

fn bind_whitelist(mut q: Query) -> Query {
    for country in COUNTRY_WHITELIST {
        q = q.bind(country.to_string());
    }
    q
}

pub fn countries_query() -> Query {
    bind_whitelist(Query::new(format!(
        r#"
        SELECT DISTINCT country
        FROM listings
        WHERE country IN ({})
        ORDER BY country
        LIMIT ? OFFSET ?
        "#,
        whitelist_placeholders()
    )))
}

pub fn listings_query() -> Query {
    bind_whitelist(Query::new(format!(
        r#"
        SELECT
            id, name, description, host_id, host_name, price, picture_url,
            host_is_superhost, host_location, substr(listed_at, 1, 10) AS listed_on,
            weekly_price, monthly_price, amenities, security_deposit, country,
            review_score, latitude, longitude
        FROM listings
        WHERE country IN ({})
        ORDER BY rowid
        LIMIT ? OFFSET ?
        "#,
        whitelist_placeholders()
    )))
}

pub fn reviews_query() -> Query {
    Query::new(
        r#"
        SELECT
            l.name AS listing_name,
            l.country AS country,
            r.reviewer_name,
            substr(r.posted_at, 1, 10) AS posted_on,
            r.rating,
            r.comments
        FROM reviews r
        LEFT JOIN listings l ON r.listing_id = l.id
        ORDER BY r.rowid
        LIMIT ? OFFSET ?
        "#,
    )
}

/// Distinct whitelisted countries present in the listings table.
pub fn countries(db: &Database) -> Result<Vec<String>, ServerError> {
    let table = fetch(db, &countries_query(), COUNTRIES_LIMIT, 0)?;
    Ok((0..table.len()).filter_map(|i| table.text(i, "country")).collect())
}

pub fn listings(db: &Database, limit: i64, offset: i64) -> Result<ListingSet, ServerError> {
    let table = fetch(db, &listings_query(), limit, offset)?;
    Ok(ListingSet::from_table(&table))
}

/// Fetched lazily, only when the comments panel is opened.
pub fn reviews(db: &Database) -> Result<Vec<Review>, ServerError> {
    let table = fetch(db, &reviews_query(), REVIEWS_LIMIT, 0)?;
    info!(rows = table.len(), "reviews fetched");
    Ok(reviews_from_table(&table))
}
