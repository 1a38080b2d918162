// src/tests/router_tests/export_tests.rs

use crate::errors::ServerError;
use crate::responses::xlsx::XLSX_CONTENT_TYPE;
use crate::router::handle;
use crate::tests::utils::{
    body_bytes, get, init_test_db, insert_listing, post_form, session_cookie_of, test_context,
    NewRoom,
};

#[test]
fn export_requires_a_search() {
    let ctx = test_context(init_test_db("export_idle"));

    let result = handle(get("/export.xlsx", None), &ctx);

    assert!(matches!(result, Err(ServerError::BadRequest(_))));
}

#[test]
fn export_returns_workbook_after_search() {
    let db = init_test_db("export_ok");
    insert_listing(&db, &NewRoom::new("A", "5", "1K").at(35.0, 139.0));
    let ctx = test_context(db);

    let first = handle(get("/", None), &ctx).unwrap();
    let cookie = session_cookie_of(&first).unwrap();
    handle(
        post_form("/search", Some(&cookie), "district=A&rent_min=0&rent_max=10&plan=1K"),
        &ctx,
    )
    .unwrap();

    let resp = handle(get("/export.xlsx", Some(&cookie)), &ctx).unwrap();

    assert_eq!(resp.status(), 200);
    assert_eq!(resp.headers().get("Content-Type").unwrap(), XLSX_CONTENT_TYPE);
    assert!(resp
        .headers()
        .get("Content-Disposition")
        .unwrap()
        .to_str()
        .unwrap()
        .contains("listings.xlsx"));
    assert!(body_bytes(resp).starts_with(b"PK"));
}
