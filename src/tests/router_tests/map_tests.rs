use crate::tests::utils::{body_string, get, init_test_db, seed_scenario};

#[test]
fn map_renders_markers_for_every_listing() {
    let db = init_test_db();
    seed_scenario(&db);

    let body = body_string(get(&db, "/?tab=locate"));
    assert!(body.contains("id=\"map\""));
    assert!(body.contains("id=\"map-data\""));
    assert!(body.contains("\"markers\":["));
    assert!(body.contains("Our Locations"));
    assert!(body.contains("🔸 Spain"));
    assert!(!body.contains("🔸 Germany"));
}

#[test]
fn missing_latitude_only_breaks_the_map() {
    let db = init_test_db();
    seed_scenario(&db);

    // First row, so it is inside the 500-row prefetch window.
    db.with_conn(|conn| {
        conn.execute("update listings set latitude = null where id = '0-0'", [])?;
        Ok(())
    })
    .unwrap();

    let resp = get(&db, "/?tab=locate");
    assert_eq!(resp.status(), 200);
    let body = body_string(resp);

    let panel = &body[body.find("id=\"panel-locate\"").unwrap()..body.find("id=\"panel-deep-dive\"").unwrap()];
    assert!(panel.contains("Map is unavailable"));
    assert!(panel.contains("latitude"));
    assert!(!panel.contains("id=\"map\""));
    assert!(!panel.contains("Our Locations"));

    // Browse tab is unaffected.
    assert!(body.contains("id=\"listing-"));
    let browse = body_string(get(&db, "/?country=Spain"));
    assert!(browse.contains("id=\"listing-"));
}
