// src/tests/router_tests/detail_tests.rs

use crate::errors::ServerError;
use crate::router::handle;
use crate::tests::utils::{body_string, get, listing, make_app, row};

#[test]
fn detail_shows_a_loaded_notice() {
    let app = make_app(
        Some("key"),
        200,
        listing(vec![row("7", "래미안 시범", "서울", "2024-06-01", "2024-06-30")]),
    );
    handle(get("/"), &app.state).unwrap();

    let resp = handle(get("/announcement?house=7&notice=7"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("래미안 시범 분양정보"));
    assert!(body.contains("분양 중"));
    assert!(body.contains("02-1234-5678"));
    assert!(body.contains("https://www.applyhome.co.kr/notice/7"));
    assert_eq!(app.calls(), 1);
}

#[test]
fn unknown_notice_is_not_found() {
    let app = make_app(
        Some("key"),
        200,
        listing(vec![row("7", "래미안 시범", "서울", "2024-06-01", "2024-06-30")]),
    );
    handle(get("/"), &app.state).unwrap();

    let err = handle(get("/announcement?house=8&notice=8"), &app.state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
}

#[test]
fn detail_before_any_load_is_not_found() {
    let app = make_app(Some("key"), 200, listing(vec![]));

    let err = handle(get("/announcement?house=7&notice=7"), &app.state).unwrap_err();
    assert!(matches!(err, ServerError::NotFound));
    assert_eq!(app.calls(), 0);
}

#[test]
fn detail_requires_both_ids() {
    let app = make_app(Some("key"), 200, listing(vec![]));

    let err = handle(get("/announcement?house=7"), &app.state).unwrap_err();
    assert!(matches!(err, ServerError::BadRequest(_)));

    let resp = crate::responses::html_error_response(err);
    assert_eq!(resp.status(), 400);
}
