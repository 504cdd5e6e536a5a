use crate::applyhome::{ApplyhomeClient, FetchError, RawResponse, Transport};
use crate::board::BoardController;
use crate::config::ApiConfig;
use crate::router::AppState;
use astra::{Body, Request, Response};
use chrono::NaiveDate;
use serde_json::{json, Value};
use std::io::Read;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use url::Url;

/// Answers every GET with the same response and remembers what was asked.
pub struct FakeTransport {
    pub calls: Arc<AtomicUsize>,
    pub urls: Arc<Mutex<Vec<Url>>>,
    response: RawResponse,
}

impl Transport for FakeTransport {
    fn get(&self, url: &Url) -> Result<RawResponse, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.urls.lock().unwrap().push(url.clone());
        Ok(self.response.clone())
    }
}

pub struct TestApp {
    pub state: AppState,
    pub calls: Arc<AtomicUsize>,
    pub urls: Arc<Mutex<Vec<Url>>>,
}

impl TestApp {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

/// App whose upstream always answers `status` / `body`, with "today"
/// pinned to 2024-06-15.
pub fn make_app(service_key: Option<&str>, status: u16, body: Value) -> TestApp {
    crate::logging::init_test();

    let calls = Arc::new(AtomicUsize::new(0));
    let urls = Arc::new(Mutex::new(Vec::new()));
    let transport = FakeTransport {
        calls: Arc::clone(&calls),
        urls: Arc::clone(&urls),
        response: RawResponse {
            status,
            body: body.to_string(),
        },
    };
    let client = ApplyhomeClient::with_transport(
        ApiConfig {
            base_url: "https://api.example.test/api".into(),
            service_key: service_key.map(str::to_string),
            per_page: 1000,
        },
        Box::new(transport),
    );
    let state = AppState::with_clock(BoardController::new(client, 10), Box::new(today));

    TestApp { state, calls, urls }
}

/// One raw row as the API sends it.
pub fn row(no: &str, name: &str, region: &str, rec: &str, ann: &str) -> Value {
    json!({
        "HOUSE_MANAGE_NO": no,
        "PBLANC_NO": no,
        "HOUSE_NM": name,
        "RCRIT_PBLANC_DE": rec,
        "PRZWNER_PRESNATN_DE": ann,
        "SUBSCRPT_AREA_CODE_NM": region,
        "MDHS_TELNO": "0212345678",
        "PBLANC_URL": format!("https://www.applyhome.co.kr/notice/{no}"),
    })
}

pub fn listing(rows: Vec<Value>) -> Value {
    json!({
        "page": 1,
        "perPage": 1000,
        "totalCount": rows.len(),
        "currentCount": rows.len(),
        "matchCount": rows.len(),
        "data": rows,
    })
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::from(String::new()))
        .unwrap()
}

pub fn body_string(mut resp: Response) -> String {
    let mut bytes = Vec::new();
    resp.body_mut().reader().read_to_end(&mut bytes).unwrap();
    String::from_utf8(bytes).unwrap()
}
