// client.rs
use crate::applyhome::models::ListResponse;
use crate::applyhome::query::{AnnouncementQuery, LISTING_PATH};
use crate::applyhome::FetchError;
use crate::config::ApiConfig;
use crate::domain::Announcement;
use reqwest::blocking::Client;
use reqwest::header::ACCEPT;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};
use url::Url;

const USER_AGENT: &str = concat!("cheongyak-board/", env!("CARGO_PKG_VERSION"));

/// Status and body of one upstream answer, whatever the status.
#[derive(Debug, Clone)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

/// Performs the single GET behind a fetch.
pub trait Transport: Send + Sync {
    fn get(&self, url: &Url) -> Result<RawResponse, FetchError>;
}

pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new() -> Result<Self, FetchError> {
        // No explicit timeout: the transport default applies.
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| FetchError::Transport {
                message: format!("HTTP client init failed: {e}"),
                status: None,
                payload: None,
            })?;

        Ok(Self { client })
    }
}

impl Transport for HttpTransport {
    fn get(&self, url: &Url) -> Result<RawResponse, FetchError> {
        let resp = self
            .client
            .get(url.as_str())
            .header(ACCEPT, "application/json")
            .send()
            .map_err(|e| FetchError::Transport {
                message: e.to_string(),
                status: e.status().map(|s| s.as_u16()),
                payload: None,
            })?;

        let status = resp.status().as_u16();
        let body = resp.text().map_err(|e| FetchError::Transport {
            message: format!("reading body failed: {e}"),
            status: Some(status),
            payload: None,
        })?;

        Ok(RawResponse { status, body })
    }
}

/// Result of one successful fetch.
#[derive(Debug, Clone)]
pub struct Listing {
    pub announcements: Vec<Announcement>,
    pub match_count: u64,
    pub server_page_count: u64,
}

pub struct ApplyhomeClient {
    config: ApiConfig,
    transport: Box<dyn Transport>,
}

impl ApplyhomeClient {
    pub fn new(config: ApiConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(config, Box::new(HttpTransport::new()?)))
    }

    pub fn with_transport(config: ApiConfig, transport: Box<dyn Transport>) -> Self {
        Self { config, transport }
    }

    pub fn per_page(&self) -> u32 {
        self.config.per_page
    }

    /// One GET, no retry. Configuration problems are reported before
    /// anything is sent.
    pub fn fetch(&self, query: &AnnouncementQuery) -> Result<Listing, FetchError> {
        let url = self.request_url(query)?;

        info!(
            region = query.region.as_deref().unwrap_or("-"),
            from = %query.window.start,
            to = %query.window.end,
            per_page = query.per_page,
            "fetching announcements"
        );
        debug!(path = url.path(), params = ?query.params(), "announcement request");

        let start = Instant::now();
        let raw = self.transport.get(&url)?;
        debug!(status = raw.status, elapsed = ?start.elapsed(), "announcement response");

        if !(200..300).contains(&raw.status) {
            return Err(FetchError::Transport {
                message: format!("HTTP {}", raw.status),
                status: Some(raw.status),
                payload: Some(raw.body),
            });
        }

        let listing = parse_listing(raw.status, raw.body, query)?;

        if listing.match_count > listing.announcements.len() as u64 {
            warn!(
                match_count = listing.match_count,
                received = listing.announcements.len(),
                "listing truncated by page size"
            );
        }

        Ok(listing)
    }

    fn request_url(&self, query: &AnnouncementQuery) -> Result<Url, FetchError> {
        let key = self
            .config
            .service_key
            .as_deref()
            .map(str::trim)
            .filter(|k| !k.is_empty())
            .ok_or_else(|| FetchError::Config("APPLYHOME_SERVICE_KEY is not set".into()))?;

        let base = self.config.base_url.trim().trim_end_matches('/');
        if base.is_empty() {
            return Err(FetchError::Config("APPLYHOME_BASE_URL is empty".into()));
        }

        let mut url = Url::parse(&format!("{base}{LISTING_PATH}"))
            .map_err(|e| FetchError::Config(format!("invalid base URL {base}: {e}")))?;

        url.query_pairs_mut()
            .append_pair("serviceKey", key)
            .extend_pairs(query.params());

        Ok(url)
    }
}

fn malformed(err: serde_json::Error, body: &str) -> FetchError {
    FetchError::Malformed {
        message: err.to_string(),
        payload: Some(body.to_string()),
    }
}

fn parse_listing(
    status: u16,
    body: String,
    query: &AnnouncementQuery,
) -> Result<Listing, FetchError> {
    if body.trim().is_empty() {
        return Err(FetchError::Malformed {
            message: "empty body".into(),
            payload: None,
        });
    }

    let value: Value = serde_json::from_str(&body).map_err(|e| malformed(e, &body))?;

    // The gateway reports some failures as 200 with `{code, msg}`.
    if value.get("code").is_some() && value.get("data").is_none() {
        let msg = value
            .get("msg")
            .and_then(Value::as_str)
            .unwrap_or("upstream error")
            .to_string();
        return Err(FetchError::Transport {
            message: msg,
            status: Some(status),
            payload: Some(body),
        });
    }

    if !value.is_object() {
        return Err(FetchError::Malformed {
            message: "expected a JSON object".into(),
            payload: Some(body),
        });
    }

    let resp: ListResponse = serde_json::from_value(value).map_err(|e| malformed(e, &body))?;

    let announcements: Vec<Announcement> = resp.data.into_iter().map(Announcement::from).collect();

    Ok(Listing {
        server_page_count: query.server_page_count(resp.match_count),
        match_count: resp.match_count,
        announcements,
    })
}
