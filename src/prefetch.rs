use std::thread;
use std::time::Instant;
use tracing::{error, info};

use crate::db::catalog::{self, PREFETCH_LISTINGS_LIMIT};
use crate::db::connection::Database;
use crate::domain::listing::ListingSet;
use crate::errors::ServerError;

/// Everything a page load needs before it can render.
#[derive(Debug, Clone)]
pub struct Prefetched {
    pub countries: Vec<String>,
    pub listings: ListingSet,
}

/// Runs the country catalog and the first listings page side by side and
/// waits for both. Either one failing fails the page load.
pub fn prefetch(db: &Database) -> Result<Prefetched, ServerError> {
    let started = Instant::now();

    let (countries, listings) = thread::scope(|s| {
        let countries = s.spawn(|| catalog::countries(db));
        let listings = s.spawn(|| catalog::listings(db, PREFETCH_LISTINGS_LIMIT, 0));
        (join(countries, "countries"), join(listings, "listings"))
    });

    let countries = countries?;
    let listings = listings?;

    info!(
        countries = countries.len(),
        listings = listings.len(),
        elapsed_ms = started.elapsed().as_millis() as u64,
        "prefetch complete"
    );

    Ok(Prefetched {
        countries,
        listings,
    })
}

fn join<T>(
    handle: thread::ScopedJoinHandle<'_, Result<T, ServerError>>,
    task: &str,
) -> Result<T, ServerError> {
    handle.join().unwrap_or_else(|_| {
        error!(task, "prefetch task panicked");
        Err(ServerError::InternalError)
    })
}
