// src/domain/status.rs

use crate::domain::Announcement;
use chrono::NaiveDate;

/// Where a notice sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SaleStatus {
    Upcoming,
    Ongoing,
    Completed,
}

impl SaleStatus {
    pub const ALL: [SaleStatus; 3] = [
        SaleStatus::Upcoming,
        SaleStatus::Ongoing,
        SaleStatus::Completed,
    ];

    /// Query-string key.
    pub fn key(self) -> &'static str {
        match self {
            SaleStatus::Upcoming => "upcoming",
            SaleStatus::Ongoing => "ongoing",
            SaleStatus::Completed => "completed",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SaleStatus::Upcoming => "분양 예정",
            SaleStatus::Ongoing => "분양 중",
            SaleStatus::Completed => "분양 완료",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            SaleStatus::Upcoming => "⏳",
            SaleStatus::Ongoing => "🏗️",
            SaleStatus::Completed => "✅",
        }
    }
}

/// Classify a notice against `today`.
///
/// Both boundaries are inclusive for `Ongoing`. A missing recruitment date
/// can never make a notice upcoming and a missing announcement date can
/// never make it completed.
pub fn sale_status(announcement: &Announcement, today: NaiveDate) -> SaleStatus {
    classify(
        announcement.recruitment_date,
        announcement.announcement_date,
        today,
    )
}

pub fn classify(
    recruitment: Option<NaiveDate>,
    announcement: Option<NaiveDate>,
    today: NaiveDate,
) -> SaleStatus {
    if recruitment.is_some_and(|rec| today < rec) {
        return SaleStatus::Upcoming;
    }
    if announcement.is_some_and(|ann| today > ann) {
        return SaleStatus::Completed;
    }
    SaleStatus::Ongoing
}
