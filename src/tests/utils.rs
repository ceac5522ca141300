use crate::config::DbConfig;
use crate::db::connection::{init_db, Database};
use crate::errors::ServerError;
use crate::router::{handle, Site};
use astra::{Body, Response};
use http::{Method, Request};
use rusqlite::params;
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

static NEXT_DB: AtomicUsize = AtomicUsize::new(0);

fn temp_db_path() -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let n = NEXT_DB.fetch_add(1, Ordering::Relaxed);
    std::env::temp_dir()
        .join(format!("rental_dashboard_test_{nanos}_{n}.sqlite"))
        .to_string_lossy()
        .into_owned()
}

/// Small pool so leaked connections show up quickly. The schema path lets
/// the pool create the file.
pub fn test_db_config() -> DbConfig {
    DbConfig {
        path: temp_db_path(),
        pool_max_size: 2,
        pool_min_idle: 1,
        pool_timeout: Duration::from_secs(5),
        schema_path: Some("sql/schema.sql".to_string()),
        seed_path: None,
    }
}

/// A fresh database file with no tables.
pub fn empty_test_db() -> Database {
    Database::open(&test_db_config()).unwrap_or_else(|e| panic!("Pool open failed: {e}"))
}

/// Initialize a fresh test DB using the production schema
pub fn init_test_db() -> Database {
    let db = empty_test_db();
    init_db(&db, "sql/schema.sql")
        .unwrap_or_else(|e| panic!("Database initialization failed: {e}"));
    db
}

#[derive(Debug, Clone)]
pub struct TestListing {
    pub id: String,
    pub name: String,
    pub country: String,
    pub price: Option<f64>,
    pub review_score: Option<f64>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub host_location: Option<String>,
    pub host_is_superhost: String,
    pub listed_at: String,
}

impl TestListing {
    pub fn new(id: &str, country: &str, price: f64, review_score: Option<f64>) -> Self {
        Self {
            id: id.to_string(),
            name: format!("Listing {id}"),
            country: country.to_string(),
            price: Some(price),
            review_score,
            latitude: Some(40.0),
            longitude: Some(-3.0),
            host_location: Some(format!("Somewhere, {country}")),
            host_is_superhost: "false".to_string(),
            listed_at: "2019-03-01 05:00:00".to_string(),
        }
    }
}

fn insert_listing_conn(conn: &rusqlite::Connection, l: &TestListing) -> Result<(), ServerError> {
    conn.execute(
        r#"
        insert into listings
          (id, name, description, host_id, host_name, host_location, host_is_superhost,
           price, weekly_price, monthly_price, security_deposit, amenities, picture_url,
           country, review_score, latitude, longitude, listed_at)
        values (?1, ?2, 'A place to stay.', 'h1', 'Host', ?3, ?4,
                ?5, null, null, 100, '[''Wifi'', ''Kitchen'']', 'https://example.com/p.jpg',
                ?6, ?7, ?8, ?9, ?10)
        "#,
        params![
            l.id,
            l.name,
            l.host_location,
            l.host_is_superhost,
            l.price,
            l.country,
            l.review_score,
            l.latitude,
            l.longitude,
            l.listed_at
        ],
    )?;
    Ok(())
}

pub fn insert_listing(db: &Database, l: &TestListing) {
    db.with_conn(|conn| insert_listing_conn(conn, l))
        .unwrap_or_else(|e| panic!("insert listing {} failed: {e}", l.id));
}

pub fn insert_review(db: &Database, listing_id: &str, reviewer: &str, rating: f64) {
    db.with_conn(|conn| {
        conn.execute(
            "insert into reviews (listing_id, reviewer_name, posted_at, rating, comments)
             values (?1, ?2, '2019-03-01 05:00:00', ?3, 'Great stay.')",
            params![listing_id, reviewer, rating],
        )?;
        Ok(())
    })
    .unwrap_or_else(|e| panic!("insert review failed: {e}"));
}

pub const SCENARIO_COUNTRIES: [&str; 9] = [
    "Australia",
    "Brazil",
    "Canada",
    "China",
    "Hong Kong",
    "Portugal",
    "Spain",
    "Turkey",
    "United States",
];

/// 540 whitelisted listings (60 per country, interleaved) plus 30 German
/// ones that must never surface. Prices and scores are deterministic.
pub fn seed_scenario(db: &Database) {
    db.with_conn(|conn| {
        let tx = conn.transaction()?;
        for i in 0..60 {
            for (c, country) in SCENARIO_COUNTRIES.iter().enumerate() {
                let mut l = TestListing::new(
                    &format!("{c}-{i}"),
                    country,
                    (20 + (i * 37 + c * 11) % 400) as f64,
                    Some((6 + (i * 7 + c) % 5) as f64),
                );
                l.latitude = Some(-30.0 + c as f64 * 7.0 + i as f64 * 0.01);
                l.longitude = Some(-100.0 + c as f64 * 25.0);
                l.host_is_superhost = if i % 4 == 0 { "true" } else { "f" }.to_string();
                insert_listing_conn(&tx, &l)?;
            }
            if i % 2 == 0 {
                insert_listing_conn(&tx, &TestListing::new(&format!("de-{i}"), "Germany", 5.0, Some(10.0)))?;
            }
        }
        tx.commit()?;
        Ok(())
    })
    .unwrap_or_else(|e| panic!("seeding failed: {e}"));
}

pub fn get(db: &Database, uri: &str) -> Response {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    match handle(req, db, &Site::default()) {
        Ok(resp) => resp,
        Err(err) => crate::responses::error_to_response(err),
    }
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}
