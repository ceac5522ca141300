use crate::db::catalog::REVIEWS_LIMIT;
use crate::tests::utils::{body_string, get, init_test_db, insert_listing, insert_review, TestListing};

#[test]
fn comments_fragment_is_capped() {
    let db = init_test_db();
    insert_listing(&db, &TestListing::new("hk1", "Hong Kong", 361.0, Some(8.0)));
    for i in 0..40 {
        insert_review(&db, "hk1", &format!("guest number {i}"), 95.0);
    }

    let resp = get(&db, "/comments");
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert_eq!(body.matches("<article class=\"review\">").count(), REVIEWS_LIMIT as usize);
    assert!(body.contains("1) Guest Number 0"));
    assert!(body.contains("Listing hk1, Hong Kong"));
    assert!(body.contains("Posted on: 2019-03-01"));
    // A fragment, not a page.
    assert!(!body.contains("<html"));
}

#[test]
fn no_reviews_is_an_empty_list() {
    let db = init_test_db();
    let body = body_string(get(&db, "/comments"));
    assert!(body.contains("No reviews yet."));
}

#[test]
fn dashboard_defers_comments() {
    let db = init_test_db();
    insert_review(&db, "x", "early bird", 90.0);

    let body = body_string(get(&db, "/"));
    assert!(body.contains("hx-get=\"/comments\""));
    assert!(!body.contains("Early Bird"));
}
