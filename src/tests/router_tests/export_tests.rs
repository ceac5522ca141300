use crate::tests::utils::{get, init_test_db, seed_scenario};
use std::io::Read;

#[test]
fn export_downloads_current_result_as_xlsx() {
    let db = init_test_db();
    seed_scenario(&db);

    let resp = get(&db, "/export?country=Hong+Kong&highclass=on");
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers().get("Content-Type").unwrap().to_str().unwrap(),
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
    assert_eq!(
        resp.headers().get("Content-Disposition").unwrap().to_str().unwrap(),
        "attachment; filename=\"listings_Hong_Kong.xlsx\""
    );

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    // xlsx is a zip archive
    assert!(bytes.starts_with(b"PK"));
}

#[test]
fn export_of_empty_result_still_has_headers() {
    let db = init_test_db();

    let resp = get(&db, "/export?country=Spain");
    assert_eq!(resp.status(), 200);

    let mut bytes = Vec::new();
    resp.into_body().reader().read_to_end(&mut bytes).unwrap();
    assert!(bytes.starts_with(b"PK"));
}
