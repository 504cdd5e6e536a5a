// src/board/store.rs

use crate::applyhome::{AnnouncementQuery, FetchError, Listing};
use crate::domain::{Announcement, AnnouncementId};
use std::sync::Arc;
use tracing::{debug, error, info, warn};

/// Permission to run one fetch. Only the ticket of the current generation
/// may write its result into the store.
#[derive(Debug)]
pub struct FetchTicket {
    generation: u64,
    query: AnnouncementQuery,
}

impl FetchTicket {
    pub fn query(&self) -> &AnnouncementQuery {
        &self.query
    }
}

/// Everything the board knows between requests: the last fetched rows,
/// what they were fetched for, and whether a fetch is pending.
#[derive(Debug, Default)]
pub struct BoardStore {
    records: Arc<Vec<Announcement>>,
    match_count: u64,
    server_page_count: u64,
    loaded_query: Option<AnnouncementQuery>,
    generation: u64,
    in_flight: Option<u64>,
    error: Option<String>,
}

impl BoardStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn needs_fetch(&self, query: &AnnouncementQuery) -> bool {
        self.loaded_query.as_ref() != Some(query)
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Start a fetch for `query`, unless one is already pending.
    pub fn begin_fetch(&mut self, query: AnnouncementQuery) -> Option<FetchTicket> {
        if let Some(pending) = self.in_flight {
            debug!(pending, "fetch already in flight, skipping");
            return None;
        }

        self.generation += 1;
        self.in_flight = Some(self.generation);
        self.error = None;

        Some(FetchTicket {
            generation: self.generation,
            query,
        })
    }

    /// Mark the pending fetch stale. It stays in flight, so no second fetch
    /// starts, but its answer is discarded when it arrives.
    pub fn mark_in_flight_stale(&mut self) {
        if let Some(pending) = self.in_flight {
            info!(pending, "pending fetch marked stale");
            self.generation += 1;
        }
    }

    /// Drop the loaded query so the next view fetches again.
    pub fn invalidate(&mut self) {
        self.loaded_query = None;
    }

    /// Apply a finished fetch. Returns false when the ticket was marked stale
    /// and its result thrown away.
    pub fn complete_fetch(
        &mut self,
        ticket: FetchTicket,
        result: Result<Listing, FetchError>,
    ) -> bool {
        if self.in_flight == Some(ticket.generation) {
            self.in_flight = None;
        }
        if ticket.generation != self.generation {
            warn!(
                ticket = ticket.generation,
                current = self.generation,
                "discarding stale fetch result"
            );
            return false;
        }

        match result {
            Ok(listing) => {
                info!(
                    rows = listing.announcements.len(),
                    match_count = listing.match_count,
                    "announcements loaded"
                );
                self.records = Arc::new(listing.announcements);
                self.match_count = listing.match_count;
                self.server_page_count = listing.server_page_count;
                self.loaded_query = Some(ticket.query);
                self.error = None;
            }
            Err(err) => {
                error!(
                    error = %err,
                    status = ?err.status(),
                    payload = err.payload().unwrap_or(""),
                    "announcement fetch failed"
                );
                self.records = Arc::new(Vec::new());
                self.match_count = 0;
                self.server_page_count = 0;
                // Left unset so the next view tries again.
                self.loaded_query = None;
                self.error = Some(err.user_message().to_string());
            }
        }
        true
    }

    pub fn records(&self) -> Arc<Vec<Announcement>> {
        Arc::clone(&self.records)
    }

    pub fn loaded_query(&self) -> Option<&AnnouncementQuery> {
        self.loaded_query.as_ref()
    }

    pub fn match_count(&self) -> u64 {
        self.match_count
    }

    pub fn server_page_count(&self) -> u64 {
        self.server_page_count
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn find(&self, id: &AnnouncementId) -> Option<&Announcement> {
        self.records.iter().find(|a| &a.id == id)
    }
}
