use crate::board::{BoardController, BoardParams};
use crate::domain::{sale_status, AnnouncementId};
use crate::errors::ServerError;
use crate::responses::html_response;
use crate::responses::ResultResp;
use crate::templates;
use astra::Request;
use chrono::NaiveDate;
use std::collections::HashMap;
use tracing::info;

type Clock = Box<dyn Fn() -> NaiveDate + Send + Sync>;

/// Shared by every worker thread.
pub struct AppState {
    pub board: BoardController,
    clock: Clock,
}

impl AppState {
    pub fn new(board: BoardController) -> Self {
        Self::with_clock(board, Box::new(|| chrono::Local::now().date_naive()))
    }

    pub fn with_clock(board: BoardController, clock: Clock) -> Self {
        Self { board, clock }
    }

    pub fn today(&self) -> NaiveDate {
        (self.clock)()
    }
}

pub fn handle(req: Request, state: &AppState) -> ResultResp {
    let method = req.method().as_str();
    let path = req.uri().path();
    info!(method, path, "request");

    match (method, path) {
        ("GET", "/") => {
            let today = state.today();
            let params = BoardParams::from_query(req.uri().query(), today)?;
            let view = state.board.view(&params.filters, today, params.refresh)?;
            html_response(templates::pages::board_page(&view))
        }
        ("GET", "/announcement") => {
            let params = parse_query(&req);
            let house = params.get("house").map(String::as_str).unwrap_or("");
            let notice = params.get("notice").map(String::as_str).unwrap_or("");
            if house.is_empty() || notice.is_empty() {
                return Err(ServerError::BadRequest(
                    "house and notice are required".into(),
                ));
            }

            let id = AnnouncementId::new(house, notice);
            let announcement = state.board.find(&id)?.ok_or(ServerError::NotFound)?;
            let status = sale_status(&announcement, state.today());
            html_response(templates::pages::detail_page(&announcement, status))
        }
        _ => Err(ServerError::NotFound),
    }
}

fn parse_query(req: &Request) -> HashMap<String, String> {
    req.uri()
        .query()
        .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
        .unwrap_or_default()
}
