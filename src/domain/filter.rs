// src/domain/filter.rs

use crate::domain::region::RegionFilter;
use crate::domain::status::{sale_status, SaleStatus};
use crate::domain::Announcement;
use chrono::NaiveDate;

/// Inclusive calendar range picked by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl Period {
    /// Builds a period, swapping the ends if they arrive reversed.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        if start <= end {
            Self { start, end }
        } else {
            Self {
                start: end,
                end: start,
            }
        }
    }

    /// Closed-interval overlap with a notice's [recruitment, announcement]
    /// span. Notices missing either date never overlap.
    pub fn overlaps(&self, announcement: &Announcement) -> bool {
        match (announcement.recruitment_date, announcement.announcement_date) {
            (Some(rec), Some(ann)) => ann >= self.start && rec <= self.end,
            _ => false,
        }
    }
}

/// Inclusion mask over sale statuses. Not an exclusive choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusMask {
    pub upcoming: bool,
    pub ongoing: bool,
    pub completed: bool,
}

impl Default for StatusMask {
    fn default() -> Self {
        Self {
            upcoming: true,
            ongoing: true,
            completed: true,
        }
    }
}

impl StatusMask {
    #[cfg(test)]
    pub fn none() -> Self {
        Self {
            upcoming: false,
            ongoing: false,
            completed: false,
        }
    }

    pub fn includes(&self, status: SaleStatus) -> bool {
        match status {
            SaleStatus::Upcoming => self.upcoming,
            SaleStatus::Ongoing => self.ongoing,
            SaleStatus::Completed => self.completed,
        }
    }

    pub fn with(mut self, status: SaleStatus, value: bool) -> Self {
        match status {
            SaleStatus::Upcoming => self.upcoming = value,
            SaleStatus::Ongoing => self.ongoing = value,
            SaleStatus::Completed => self.completed = value,
        }
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    pub region: RegionFilter,
    pub period: Option<Period>,
    pub sale_status: StatusMask,
    /// 1-based.
    pub current_page: usize,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            region: RegionFilter::All,
            period: None,
            sale_status: StatusMask::default(),
            current_page: 1,
        }
    }
}

/// A single user action on the filters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterCommand {
    SetRegion(RegionFilter),
    SetPeriod(Option<Period>),
    SetSaleStatus(SaleStatus, bool),
    SetPage(usize),
    Reset,
}

impl FilterState {
    /// Returns the state after `command`. Every filter change goes back to
    /// page 1; only `SetPage` moves the page.
    pub fn apply(&self, command: FilterCommand) -> FilterState {
        match command {
            FilterCommand::SetRegion(region) => FilterState {
                region,
                current_page: 1,
                ..self.clone()
            },
            FilterCommand::SetPeriod(period) => FilterState {
                period,
                current_page: 1,
                ..self.clone()
            },
            FilterCommand::SetSaleStatus(status, value) => FilterState {
                sale_status: self.sale_status.with(status, value),
                current_page: 1,
                ..self.clone()
            },
            FilterCommand::SetPage(page) => FilterState {
                current_page: page.max(1),
                ..self.clone()
            },
            FilterCommand::Reset => FilterState::default(),
        }
    }

    pub fn admits(&self, announcement: &Announcement, today: NaiveDate) -> bool {
        if !self.region.matches(&announcement.region_name) {
            return false;
        }

        if let Some(period) = &self.period {
            if !period.overlaps(announcement) {
                return false;
            }
        }

        self.sale_status
            .includes(sale_status(announcement, today))
    }
}

/// Visible subset of `records` under `filters`, in the original order.
pub fn filter_announcements<'a>(
    filters: &FilterState,
    records: &'a [Announcement],
    today: NaiveDate,
) -> Vec<&'a Announcement> {
    records
        .iter()
        .filter(|record| filters.admits(record, today))
        .collect()
}
