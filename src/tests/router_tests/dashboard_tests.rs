// src/tests/router_tests/dashboard_tests.rs

use crate::db::connection::{init_db, Database};
use crate::domain::filter::{browse, mean_price, rank_by_country, FilterMode, FilterState};
use crate::prefetch::prefetch;
use crate::tests::utils::{body_string, empty_test_db, get, init_test_db, seed_scenario, test_db_config, SCENARIO_COUNTRIES};
use std::time::Duration;

/// Listing ids in the order their cards appear in the page.
fn card_ids(body: &str) -> Vec<String> {
    body.match_indices("id=\"listing-")
        .map(|(at, m)| {
            let rest = &body[at + m.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect()
}

#[test]
fn dashboard_renders_all_three_tabs() {
    let db = init_test_db();
    seed_scenario(&db);

    let resp = get(&db, "/");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("id=\"panel-browse\""));
    assert!(body.contains("id=\"panel-locate\""));
    assert!(body.contains("id=\"panel-deep-dive\""));
    assert!(body.contains("Country Wise Price"));
    // Defaults to the first catalog country.
    assert!(body.contains("<option value=\"Australia\" selected>"));
}

#[test]
fn country_selector_lists_each_whitelisted_country_once() {
    let db = init_test_db();
    seed_scenario(&db);

    let body = body_string(get(&db, "/"));
    for country in SCENARIO_COUNTRIES {
        let needle = format!("<option value=\"{country}\"");
        assert_eq!(body.matches(&needle).count(), 1, "{country}");
    }
    assert!(!body.contains("<option value=\"Germany\""));
}

#[test]
fn spain_budget_scenario() {
    let db = init_test_db();
    seed_scenario(&db);

    let data = prefetch(&db).unwrap();
    assert_eq!(data.listings.len(), 500);

    let spain = rank_by_country(&data.listings.listings, "Spain");
    let mean = mean_price(&spain).unwrap();

    let state = FilterState {
        country: "Spain".into(),
        mode: FilterMode::Budget,
        price_ceiling: 0.0,
    };
    let expected = browse(&data.listings.listings, &state);
    assert!(expected.count > 0);
    assert!(expected.listings.iter().all(|l| l.country == "Spain" && l.price < mean));
    for pair in expected.listings.windows(2) {
        assert!(pair[0].review_score >= pair[1].review_score);
    }

    let body = body_string(get(&db, "/?country=Spain&budget=on"));
    let expected_ids: Vec<String> = expected.listings.iter().map(|l| l.id.clone()).collect();
    assert_eq!(card_ids(&body), expected_ids);
    assert!(body.contains(&format!("<strong>{}</strong>", expected.count)));
    assert!(body.contains("EUR"));
}

#[test]
fn price_ceiling_narrows_the_cards() {
    let db = init_test_db();
    seed_scenario(&db);

    let all = card_ids(&body_string(get(&db, "/?country=Canada")));
    let capped = card_ids(&body_string(get(&db, "/?country=Canada&max_price=100")));

    assert!(!capped.is_empty());
    assert!(capped.len() < all.len());
    assert!(capped.iter().all(|id| all.contains(id)));
}

#[test]
fn switching_country_drops_the_price_ceiling() {
    let db = init_test_db();
    seed_scenario(&db);

    let body = body_string(get(&db, "/?country=Canada&max_price=100"));
    assert!(body.contains(r#"onchange="this.form.max_price.disabled = true; this.form.submit()""#));
}

#[test]
fn empty_store_renders_zero_results() {
    let db = init_test_db();

    let resp = get(&db, "/?country=Spain&budget=on&max_price=10");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("<strong>0</strong>"));
    assert!(card_ids(&body).is_empty());
}

#[test]
fn bad_input_is_a_400() {
    let db = init_test_db();
    assert_eq!(get(&db, "/?max_price=lots").status(), 400);
    assert_eq!(get(&db, "/?tab=nowhere").status(), 400);
}

#[test]
fn unknown_route_is_a_404() {
    let db = init_test_db();
    assert_eq!(get(&db, "/admin").status(), 404);
}

#[test]
fn exhausted_pool_reports_data_unavailable() {
    let mut cfg = test_db_config();
    cfg.pool_max_size = 1;
    cfg.pool_timeout = Duration::from_millis(300);
    let db = Database::open(&cfg).unwrap();
    init_db(&db, "sql/schema.sql").unwrap();

    // Hold the only connection while the page tries to prefetch.
    let resp = db.with_conn(|_held| Ok(get(&db, "/"))).unwrap();
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("Data unavailable"));

    // Released afterwards.
    assert_eq!(get(&db, "/").status(), 200);
}

#[test]
fn missing_tables_report_data_unavailable() {
    let db = empty_test_db();

    let resp = get(&db, "/");
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("Data unavailable"));
    assert_eq!(get(&db, "/export").status(), 503);
}

#[test]
fn missing_store_file_reports_data_unavailable() {
    let mut cfg = test_db_config();
    cfg.schema_path = None;
    cfg.pool_timeout = Duration::from_millis(300);
    let db = Database::open(&cfg).unwrap();

    let resp = get(&db, "/");
    assert_eq!(resp.status(), 503);
    assert!(body_string(resp).contains("Data unavailable"));
    assert_eq!(get(&db, "/comments").status(), 503);
    assert_eq!(get(&db, "/health").status(), 503);
    assert!(!std::path::Path::new(&cfg.path).exists());
}

#[test]
fn static_and_health_routes() {
    let db = init_test_db();

    let css = get(&db, "/static/main.css");
    assert_eq!(css.status(), 200);
    assert_eq!(
        css.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "text/css; charset=utf-8"
    );

    let health = get(&db, "/health");
    assert_eq!(health.status(), 200);
    assert_eq!(body_string(health), "ok");
}
