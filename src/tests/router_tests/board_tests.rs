// src/tests/router_tests/board_tests.rs

use crate::router::handle;
use crate::tests::utils::{body_string, get, listing, make_app, row};
use serde_json::json;

fn sample_rows() -> Vec<serde_json::Value> {
    vec![
        row("1", "서울 진행 단지", "서울", "2024-06-01", "2024-06-30"),
        row("2", "부산 예정 단지", "부산", "20240701", "20240720"),
        row("3", "서울 완료 단지", "서울", "2024-05-01", "2024-05-20"),
    ]
}

#[test]
fn board_lists_all_cards_by_default() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));

    let resp = handle(get("/"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("서울 진행 단지"));
    assert!(body.contains("부산 예정 단지"));
    assert!(body.contains("서울 완료 단지"));
    assert!(body.contains("분양 중"));
    assert!(body.contains("분양 예정"));
    assert!(body.contains("분양 완료"));
    assert!(body.contains("지역: 전체 | 공고기간: - ~ -"));
    assert_eq!(app.calls(), 1);
}

#[test]
fn region_is_sent_upstream_and_applied_locally() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));

    // region=서울
    let resp = handle(get("/?region=%EC%84%9C%EC%9A%B8"), &app.state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("서울 진행 단지"));
    assert!(!body.contains("부산 예정 단지"));

    let urls = app.urls.lock().unwrap();
    let pairs: Vec<(String, String)> = urls[0].query_pairs().into_owned().collect();
    assert!(pairs.contains(&(
        "cond[SUBSCRPT_AREA_CODE_NM::EQ]".to_string(),
        "서울".to_string()
    )));
}

#[test]
fn status_checkboxes_narrow_results_without_refetch() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));
    handle(get("/"), &app.state).unwrap();

    let resp = handle(get("/?status=1&upcoming=on"), &app.state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("부산 예정 단지"));
    assert!(!body.contains("서울 진행 단지"));
    assert!(!body.contains("서울 완료 단지"));
    assert_eq!(app.calls(), 1);
}

#[test]
fn period_outside_every_notice_shows_empty_state() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));

    let resp = handle(get("/?start=2024-01-01&end=2024-03-31"), &app.state).unwrap();
    let body = body_string(resp);

    assert!(body.contains("검색 조건에 맞는 분양 정보가 없습니다."));
    assert!(!body.contains("오류가 발생했습니다"));
}

#[test]
fn pages_hold_ten_cards() {
    let rows = (0..23)
        .map(|i| {
            row(
                &format!("{i}"),
                &format!("단지-{i:02}"),
                "경기",
                "2024-06-01",
                "2024-06-30",
            )
        })
        .collect();
    let app = make_app(Some("key"), 200, listing(rows));

    let body = body_string(handle(get("/?page=3"), &app.state).unwrap());
    assert!(body.contains("단지-20"));
    assert!(body.contains("단지-22"));
    assert!(!body.contains("단지-19"));
    assert!(body.contains("3 / 3"));

    // Past the end falls back to the first page.
    let body = body_string(handle(get("/?page=9"), &app.state).unwrap());
    assert!(body.contains("단지-00"));
    assert!(body.contains("1 / 3"));
}

#[test]
fn missing_key_shows_message_without_calling_upstream() {
    let app = make_app(None, 200, listing(sample_rows()));

    let resp = handle(get("/"), &app.state).unwrap();
    assert_eq!(resp.status(), 200);

    let body = body_string(resp);
    assert!(body.contains("오류가 발생했습니다"));
    assert!(body.contains("서비스 설정 오류"));
    assert_eq!(app.calls(), 0);
}

#[test]
fn upstream_failure_is_a_friendly_message() {
    let app = make_app(
        Some("key"),
        500,
        json!({ "code": -1, "msg": "internal upstream detail" }),
    );

    let body = body_string(handle(get("/"), &app.state).unwrap());
    assert!(body.contains("분양 정보 조회에 실패했습니다."));
    assert!(!body.contains("internal upstream detail"));

    // Each view retries after a failure.
    handle(get("/"), &app.state).unwrap();
    assert_eq!(app.calls(), 2);
}

#[test]
fn refresh_forces_a_new_fetch() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));
    handle(get("/"), &app.state).unwrap();
    handle(get("/"), &app.state).unwrap();
    assert_eq!(app.calls(), 1);

    handle(get("/?refresh=1"), &app.state).unwrap();
    assert_eq!(app.calls(), 2);
}

#[test]
fn bad_filters_are_rejected() {
    let app = make_app(Some("key"), 200, listing(sample_rows()));

    let err = handle(get("/?region=Atlantis"), &app.state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::BadRequest(_)));
    assert_eq!(app.calls(), 0);
}

#[test]
fn unknown_path_is_not_found() {
    let app = make_app(Some("key"), 200, listing(vec![]));
    let err = handle(get("/nope"), &app.state).unwrap_err();
    assert!(matches!(err, crate::errors::ServerError::NotFound));

    let resp = crate::responses::html_error_response(err);
    assert_eq!(resp.status(), 404);
}
