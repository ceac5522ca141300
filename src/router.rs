use std::collections::HashMap;

use crate::db::{catalog, Database};
use crate::domain::aggregate::{distinct_sorted, mean_price_by_country};
use crate::domain::filter::{browse, currency_for, FilterMode, FilterState};
use crate::domain::map::build_map_view;
use crate::errors::ServerError;
use crate::prefetch::prefetch;
use crate::responses::{css_response, html_response, text_response, ResultResp};
use crate::spreadsheets::export_listings_xlsx;
use crate::templates::pages::browse::BrowseVm;
use crate::templates::pages::locate::LocateVm;
use crate::templates::pages::{comments_fragment, dashboard_page, DashboardVm, Tab};
use astra::Request;
use tracing::{debug, warn};

const MAIN_CSS: &str = include_str!("../static/main.css");

/// Per-request settings that don't come from the store.
#[derive(Debug, Clone, Default)]
pub struct Site {
    pub logo_url: Option<String>,
}

pub fn handle(req: Request, db: &Database, site: &Site) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    debug!(method, path, "request");

    match (method, path) {
        ("GET", "/") => dashboard(&req, db, site),
        ("GET", "/comments") => comments(db),
        ("GET", "/export") => export(&req, db),
        ("GET", "/static/main.css") => css_response(MAIN_CSS),
        ("GET", "/health") => match db.ping() {
            Ok(()) => text_response(200, "ok"),
            Err(e) => {
                warn!(error = %e, "health check failed");
                text_response(503, "unavailable")
            }
        },
        _ => Err(ServerError::NotFound),
    }
}

fn dashboard(req: &Request, db: &Database, site: &Site) -> ResultResp {
    let params = parse_query(req);
    let data = prefetch(db).map_err(data_unavailable)?;

    let filter = filter_state(&params, &data.countries)?;
    let active = match params.get("tab") {
        Some(raw) => Tab::parse(raw).ok_or_else(|| ServerError::BadRequest(format!("unknown tab: {raw}")))?,
        None => Tab::default(),
    };

    let result = browse(&data.listings.listings, &filter);

    // Map, locations and aggregates always use the full prefetched set.
    let map = build_map_view(&data.listings);
    if let Err(e) = &map {
        warn!(error = %e, "map view unavailable");
    }
    let locations = distinct_sorted(&data.listings.listings, |l| Some(l.country.as_str()));
    let host_locations = distinct_sorted(&data.listings.listings, |l| l.host_location.as_deref());
    let country_prices = mean_price_by_country(&data.listings.listings);

    let query = canonical_query(&filter);

    let vm = DashboardVm {
        logo_url: site.logo_url.as_deref(),
        active,
        browse: BrowseVm {
            countries: &data.countries,
            filter: &filter,
            result: &result,
            query: &query,
        },
        locate: LocateVm {
            map: &map,
            locations: &locations,
            host_locations: &host_locations,
        },
        country_prices: &country_prices,
    };

    html_response(dashboard_page(&vm))
}

fn comments(db: &Database) -> ResultResp {
    let reviews = catalog::reviews(db)?;
    html_response(comments_fragment(&reviews))
}

fn export(req: &Request, db: &Database) -> ResultResp {
    let params = parse_query(req);
    let data = prefetch(db).map_err(data_unavailable)?;
    let filter = filter_state(&params, &data.countries)?;
    let result = browse(&data.listings.listings, &filter);

    export_listings_xlsx(&result.listings, &filter.country, currency_for(&filter.country))
}

/// A page can't render without its prefetch, whatever broke underneath.
fn data_unavailable(err: ServerError) -> ServerError {
    match err {
        ServerError::DataUnavailable(_) => err,
        other => {
            warn!(error = %other, "prefetch failed");
            ServerError::DataUnavailable(other.to_string())
        }
    }
}

/// Reads the browse controls. A missing country falls back to the first one
/// in the catalog (or empty when the catalog is empty).
pub fn filter_state(
    params: &HashMap<String, String>,
    countries: &[String],
) -> Result<FilterState, ServerError> {
    let country = params
        .get("country")
        .cloned()
        .or_else(|| countries.first().cloned())
        .unwrap_or_default();

    let budget = params.get("budget").is_some_and(|v| is_on(v));
    let highclass = params.get("highclass").is_some_and(|v| is_on(v));

    let price_ceiling = match params.get("max_price").map(|s| s.trim()) {
        None | Some("") => 0.0,
        Some(raw) => {
            let v: f64 = raw
                .parse()
                .map_err(|_| ServerError::BadRequest(format!("max_price is not a number: {raw}")))?;
            if !v.is_finite() || v < 0.0 {
                return Err(ServerError::BadRequest(format!("max_price out of range: {raw}")));
            }
            v
        }
    };

    Ok(FilterState {
        country,
        mode: FilterMode::from_toggles(budget, highclass),
        price_ceiling,
    })
}

fn is_on(v: &str) -> bool {
    matches!(v, "on" | "true" | "1")
}

/// Query string that reproduces `filter`. Only the effective mode is kept.
pub fn canonical_query(filter: &FilterState) -> String {
    let mut q = url::form_urlencoded::Serializer::new(String::new());
    q.append_pair("country", &filter.country);
    match filter.mode {
        FilterMode::Budget => {
            q.append_pair("budget", "on");
        }
        FilterMode::HighClass => {
            q.append_pair("highclass", "on");
        }
        FilterMode::All => {}
    }
    if filter.price_ceiling > 0.0 {
        q.append_pair("max_price", &filter.price_ceiling.to_string());
    }
    q.finish()
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
