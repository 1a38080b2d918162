// src/tests/router_tests/dashboard_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{
    body_string, get, init_test_db, insert_listing, session_cookie_of, test_context, NewRoom,
    TestDb,
};

#[test]
fn first_visit_is_idle_and_sets_cookie() {
    let db = init_test_db("dash_idle");
    insert_listing(&db, &NewRoom::new("渋谷区", "8", "1K").at(35.66, 139.70));
    insert_listing(&db, &NewRoom::new("新宿区", "9.5", "2DK"));
    let ctx = test_context(db);

    let resp = handle(get("/", None), &ctx).unwrap();

    assert_eq!(resp.status(), 200);
    let cookie = session_cookie_of(&resp).expect("new session should set a cookie");
    assert!(cookie.starts_with("session="));

    let body = body_string(resp);
    assert!(body.contains("press Search"));
    assert!(!body.contains(r#"id="map""#), "no map before the first search");
    assert!(!body.contains(r#"class="listings""#), "no table before the first search");

    // Controls are built from the stored rows
    assert!(body.contains(r#"value="渋谷区""#));
    assert!(body.contains(r#"value="新宿区""#));
    assert!(body.contains(r#"value="2DK""#));
}

#[test]
fn known_cookie_does_not_start_a_new_session() {
    let ctx = test_context(init_test_db("dash_cookie"));

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie_of(&first).unwrap();

    let second = handle(get("/", Some(&cookie)), &ctx).unwrap();

    assert_eq!(second.status(), 200);
    assert!(second.headers().get("Set-Cookie").is_none());
}

#[test]
fn missing_store_shows_banner_instead_of_failing() {
    let ctx = test_context(TestDb::new("dash_missing"));

    let resp = handle(get("/", None), &ctx).unwrap();

    assert_eq!(resp.status(), 200);
    let body = body_string(resp);
    assert!(body.contains("Error loading data from database"));
    assert!(body.contains("No districts available."));
}

#[test]
fn unknown_route_is_not_found() {
    let ctx = test_context(init_test_db("dash_404"));

    let result = handle(get("/nope", None), &ctx);

    assert!(matches!(result, Err(ServerError::NotFound)));
}
