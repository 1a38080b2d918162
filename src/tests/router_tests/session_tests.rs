// src/tests/router_tests/session_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{get, init_test_db, post_form, session_cookie_of, test_context};

#[test]
fn toggle_without_cookie_creates_no_session() {
    let ctx = test_context(init_test_db("session_toggle"));

    let resp = handle(post_form("/toggle", None, ""), &ctx).unwrap();

    assert_eq!(resp.status(), 303);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(ctx.sessions.session_count(), 0);
}

#[test]
fn export_with_unknown_cookie_creates_no_session() {
    let ctx = test_context(init_test_db("session_export"));

    let result = handle(get("/export.xlsx", Some("session=stale-token")), &ctx);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
    assert_eq!(ctx.sessions.session_count(), 0);
}

#[test]
fn unknown_routes_create_no_session() {
    let ctx = test_context(init_test_db("session_404"));

    for uri in ["/robots.txt", "/favicon.ico", "/admin"] {
        assert!(matches!(handle(get(uri, None), &ctx), Err(ServerError::NotFound)));
    }

    assert_eq!(ctx.sessions.session_count(), 0);
}

#[test]
fn toggle_keeps_an_existing_session() {
    let ctx = test_context(init_test_db("session_keep"));

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie_of(&first).unwrap();

    let resp = handle(post_form("/toggle", Some(&cookie), ""), &ctx).unwrap();

    assert_eq!(resp.status(), 303);
    assert!(resp.headers().get("Set-Cookie").is_none());
    assert_eq!(ctx.sessions.session_count(), 1);
}
