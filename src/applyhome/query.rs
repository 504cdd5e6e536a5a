use crate::domain::announcement::format_iso;
use crate::domain::FilterState;
use chrono::{Datelike, NaiveDate};

pub const LISTING_PATH: &str = "/ApplyhomeInfoDetailSvc/v1/getAPTLttotPblancDetail";

pub const REGION_CONDITION: &str = "cond[SUBSCRPT_AREA_CODE_NM::EQ]";
pub const FROM_CONDITION: &str = "cond[RCRIT_PBLANC_DE::GTE]";
pub const TO_CONDITION: &str = "cond[RCRIT_PBLANC_DE::LTE]";

/// Bounds on the recruitment-notice date sent upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    fn from_ymd(start: (i32, u32, u32), end: (i32, u32, u32)) -> Option<Self> {
        Some(Self {
            start: NaiveDate::from_ymd_opt(start.0, start.1, start.2)?,
            end: NaiveDate::from_ymd_opt(end.0, end.1, end.2)?,
        })
    }

    /// Smallest window covering both.
    pub fn union(self, start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: self.start.min(start),
            end: self.end.max(end),
        }
    }
}

/// Rolling window that always contains the current month:
/// - October to December: Jan 1 this year .. Dec 31 next year
/// - January to April: Oct 1 last year .. Dec 31 this year
/// - otherwise: the current calendar year
pub fn default_window(today: NaiveDate) -> DateWindow {
    let year = today.year();
    let month0 = today.month0();

    let window = if month0 >= 9 {
        DateWindow::from_ymd((year, 1, 1), (year + 1, 12, 31))
    } else if month0 < 4 {
        DateWindow::from_ymd((year - 1, 10, 1), (year, 12, 31))
    } else {
        DateWindow::from_ymd((year, 1, 1), (year, 12, 31))
    };

    // Only fails at the edges of chrono's year range.
    window.unwrap_or(DateWindow {
        start: today,
        end: today,
    })
}

/// Everything that decides what the upstream listing returns. Two equal
/// queries return the same rows, so the board re-fetches only when the
/// query changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnnouncementQuery {
    pub region: Option<String>,
    pub window: DateWindow,
    pub page: u32,
    pub per_page: u32,
}

impl AnnouncementQuery {
    /// The region goes upstream; the period only widens the date window
    /// and is otherwise applied locally by overlap.
    pub fn for_filters(filters: &FilterState, today: NaiveDate, per_page: u32) -> Self {
        let mut window = default_window(today);
        if let Some(period) = filters.period {
            window = window.union(period.start, period.end);
        }

        Self {
            region: filters.region.as_condition().map(str::to_string),
            window,
            page: 1,
            per_page: per_page.max(1),
        }
    }

    /// Query-string pairs, without the credential.
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.max(1).to_string()),
            ("perPage", self.per_page.max(1).to_string()),
            ("returnType", "JSON".to_string()),
        ];

        if let Some(region) = self.region.as_deref().map(str::trim) {
            if !region.is_empty() {
                params.push((REGION_CONDITION, region.to_string()));
            }
        }

        params.push((FROM_CONDITION, format_iso(self.window.start)));
        params.push((TO_CONDITION, format_iso(self.window.end)));
        params
    }

    /// Pages the server would need at this page size.
    pub fn server_page_count(&self, match_count: u64) -> u64 {
        match_count.div_ceil(u64::from(self.per_page.max(1)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FilterCommand, Period, RegionFilter};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn window_in_autumn_looks_a_year_ahead() {
        let w = default_window(d(2024, 10, 1));
        assert_eq!((w.start, w.end), (d(2024, 1, 1), d(2025, 12, 31)));
        let w = default_window(d(2024, 12, 31));
        assert_eq!((w.start, w.end), (d(2024, 1, 1), d(2025, 12, 31)));
    }

    #[test]
    fn window_in_spring_looks_back_to_october() {
        let w = default_window(d(2024, 1, 1));
        assert_eq!((w.start, w.end), (d(2023, 10, 1), d(2024, 12, 31)));
        let w = default_window(d(2024, 4, 30));
        assert_eq!((w.start, w.end), (d(2023, 10, 1), d(2024, 12, 31)));
    }

    #[test]
    fn window_mid_year_is_calendar_year() {
        for today in [d(2024, 5, 1), d(2024, 6, 15), d(2024, 9, 30)] {
            let w = default_window(today);
            assert_eq!((w.start, w.end), (d(2024, 1, 1), d(2024, 12, 31)));
        }
    }

    #[test]
    fn all_regions_omits_region_condition() {
        let query = AnnouncementQuery::for_filters(&FilterState::default(), d(2024, 6, 15), 1000);
        let params = query.params();

        assert_eq!(param(&params, REGION_CONDITION), None);
        assert_eq!(param(&params, "page"), Some("1"));
        assert_eq!(param(&params, "perPage"), Some("1000"));
        assert_eq!(param(&params, "returnType"), Some("JSON"));
        assert_eq!(param(&params, FROM_CONDITION), Some("2024-01-01"));
        assert_eq!(param(&params, TO_CONDITION), Some("2024-12-31"));
        assert!(params.iter().all(|(k, _)| *k != "serviceKey"));
    }

    #[test]
    fn region_is_sent() {
        let filters =
            FilterState::default().apply(FilterCommand::SetRegion(RegionFilter::Only("경기".into())));
        let params = AnnouncementQuery::for_filters(&filters, d(2024, 6, 15), 50).params();
        assert_eq!(param(&params, REGION_CONDITION), Some("경기"));
        assert_eq!(param(&params, "perPage"), Some("50"));
    }

    #[test]
    fn period_widens_window_only_when_outside() {
        let today = d(2024, 6, 15);

        let inside = FilterState::default().apply(FilterCommand::SetPeriod(Some(Period::new(
            d(2024, 3, 1),
            d(2024, 3, 31),
        ))));
        assert_eq!(
            AnnouncementQuery::for_filters(&inside, today, 10),
            AnnouncementQuery::for_filters(&FilterState::default(), today, 10)
        );

        let outside = FilterState::default().apply(FilterCommand::SetPeriod(Some(Period::new(
            d(2023, 11, 1),
            d(2025, 2, 1),
        ))));
        let window = AnnouncementQuery::for_filters(&outside, today, 10).window;
        assert_eq!((window.start, window.end), (d(2023, 11, 1), d(2025, 2, 1)));
    }

    #[test]
    fn page_count_uses_match_count() {
        let query = AnnouncementQuery::for_filters(&FilterState::default(), d(2024, 6, 15), 10);
        assert_eq!(query.server_page_count(0), 0);
        assert_eq!(query.server_page_count(23), 3);
        assert_eq!(query.server_page_count(30), 3);
    }
}
