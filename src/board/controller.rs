// src/board/controller.rs

use crate::applyhome::{AnnouncementQuery, ApplyhomeClient};
use crate::board::store::BoardStore;
use crate::domain::{
    filter_announcements, paginate, sale_status, Announcement, AnnouncementId, FilterState, Page,
    SaleStatus,
};
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::sync::{Mutex, MutexGuard};
use tracing::debug;

/// A notice as the board shows it.
#[derive(Debug, Clone)]
pub struct CardVm {
    pub announcement: Announcement,
    pub status: SaleStatus,
}

/// Everything a board page needs to render.
#[derive(Debug)]
pub struct BoardView {
    pub filters: FilterState,
    pub today: NaiveDate,
    pub page: Page<CardVm>,
    pub match_count: u64,
    pub server_page_count: u64,
    /// A fetch for a different query is still running; the cards may not
    /// reflect the filters yet.
    pub loading: bool,
    pub error: Option<String>,
}

impl BoardView {
    /// Zero visible notices and nothing went wrong.
    pub fn is_empty_result(&self) -> bool {
        self.error.is_none() && !self.loading && self.page.is_empty()
    }
}

pub struct BoardController {
    client: ApplyhomeClient,
    store: Mutex<BoardStore>,
    items_per_page: usize,
}

impl BoardController {
    pub fn new(client: ApplyhomeClient, items_per_page: usize) -> Self {
        Self {
            client,
            store: Mutex::new(BoardStore::new()),
            items_per_page: items_per_page.max(1),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, BoardStore>, ServerError> {
        self.store.lock().map_err(|_| ServerError::InternalError)
    }

    /// Fetch when the query changed (or a refresh was asked for), then
    /// filter and slice the current rows.
    pub fn view(
        &self,
        filters: &FilterState,
        today: NaiveDate,
        refresh: bool,
    ) -> Result<BoardView, ServerError> {
        let query = AnnouncementQuery::for_filters(filters, today, self.client.per_page());
        self.sync(&query, refresh)?;

        let (records, match_count, server_page_count, loading, error) = {
            let store = self.lock()?;
            let loading = store.is_loading() && store.loaded_query() != Some(&query);
            (
                store.records(),
                store.match_count(),
                store.server_page_count(),
                loading,
                store.error().map(str::to_string),
            )
        };

        let cards: Vec<CardVm> = filter_announcements(filters, &records, today)
            .into_iter()
            .map(|a| CardVm {
                status: sale_status(a, today),
                announcement: a.clone(),
            })
            .collect();
        let page = paginate(&cards, filters.current_page, self.items_per_page);

        let mut filters = filters.clone();
        filters.current_page = page.number;

        Ok(BoardView {
            filters,
            today,
            page,
            match_count,
            server_page_count,
            loading,
            error,
        })
    }

    /// At most one fetch per call. The store lock is not held while the
    /// request is on the wire.
    fn sync(&self, query: &AnnouncementQuery, refresh: bool) -> Result<(), ServerError> {
        let ticket = {
            let mut store = self.lock()?;
            if refresh {
                // A pending fetch is left to finish; the next view fetches
                // again once it lands.
                store.invalidate();
                store.mark_in_flight_stale();
            }
            if !store.needs_fetch(query) {
                return Ok(());
            }
            store.begin_fetch(query.clone())
        };

        let Some(ticket) = ticket else {
            return Ok(());
        };

        let result = self.client.fetch(ticket.query());
        let applied = self.lock()?.complete_fetch(ticket, result);
        debug!(applied, "fetch finished");
        Ok(())
    }

    /// Look a notice up among the rows already loaded.
    pub fn find(&self, id: &AnnouncementId) -> Result<Option<Announcement>, ServerError> {
        Ok(self.lock()?.find(id).cloned())
    }
}
