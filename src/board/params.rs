// src/board/params.rs

use crate::domain::announcement::{format_iso, parse_api_date};
use crate::domain::{FilterCommand, FilterState, Period, PeriodPreset, RegionFilter, SaleStatus, StatusMask};
use crate::errors::ServerError;
use chrono::NaiveDate;
use std::collections::HashMap;

/// Marks a submitted status form, so that unchecked boxes (which browsers
/// leave out) mean "off" instead of "default".
const STATUS_MARKER: &str = "status";

/// Board filters as carried in the page URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardParams {
    pub filters: FilterState,
    pub refresh: bool,
}

impl BoardParams {
    /// Replays the query string as filter commands on top of the defaults.
    pub fn from_query(query: Option<&str>, today: NaiveDate) -> Result<Self, ServerError> {
        let params: HashMap<String, String> = query
            .map(|q| url::form_urlencoded::parse(q.as_bytes()).into_owned().collect())
            .unwrap_or_default();
        let get = |key: &str| params.get(key).map(|v| v.trim()).filter(|v| !v.is_empty());

        let mut filters = FilterState::default();

        if let Some(raw) = get("region") {
            let region = RegionFilter::parse(raw).map_err(ServerError::BadRequest)?;
            filters = filters.apply(FilterCommand::SetRegion(region));
        }

        let period = match get("preset") {
            Some(key) => {
                let preset = PeriodPreset::from_key(key)
                    .ok_or_else(|| ServerError::BadRequest(format!("unknown preset: {key}")))?;
                Some(preset.period(today))
            }
            None => match (get("start"), get("end")) {
                (Some(start), Some(end)) => Some(Period::new(parse_date(start)?, parse_date(end)?)),
                _ => None,
            },
        };
        if period.is_some() {
            filters = filters.apply(FilterCommand::SetPeriod(period));
        }

        if params.contains_key(STATUS_MARKER) {
            for status in SaleStatus::ALL {
                filters = filters.apply(FilterCommand::SetSaleStatus(
                    status,
                    get(status.key()).is_some(),
                ));
            }
        }

        if let Some(raw) = get("page") {
            let page = raw
                .parse::<usize>()
                .map_err(|_| ServerError::BadRequest(format!("invalid page: {raw}")))?;
            filters = filters.apply(FilterCommand::SetPage(page));
        }

        let refresh = matches!(get("refresh"), Some("1") | Some("true"));

        Ok(Self { filters, refresh })
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ServerError> {
    parse_api_date(raw).ok_or_else(|| ServerError::BadRequest(format!("invalid date: {raw}")))
}

/// Link to the board showing `filters` at `page`.
pub fn board_href(filters: &FilterState, page: usize) -> String {
    let mut ser = url::form_urlencoded::Serializer::new(String::new());

    if let RegionFilter::Only(region) = &filters.region {
        ser.append_pair("region", region);
    }
    if let Some(period) = &filters.period {
        ser.append_pair("start", &format_iso(period.start));
        ser.append_pair("end", &format_iso(period.end));
    }
    if filters.sale_status != StatusMask::default() {
        ser.append_pair(STATUS_MARKER, "1");
        for status in SaleStatus::ALL {
            if filters.sale_status.includes(status) {
                ser.append_pair(status.key(), "on");
            }
        }
    }
    if page > 1 {
        ser.append_pair("page", &page.to_string());
    }

    let query = ser.finish();
    if query.is_empty() {
        "/".to_string()
    } else {
        format!("/?{query}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn no_query_means_defaults() {
        let params = BoardParams::from_query(None, today()).unwrap();
        assert_eq!(params.filters, FilterState::default());
        assert!(!params.refresh);
    }

    #[test]
    fn reads_every_filter() {
        let q = "region=%EB%B6%80%EC%82%B0&start=2024-01-01&end=2024-03-31&status=1&upcoming=on&page=2&refresh=1";
        let params = BoardParams::from_query(Some(q), today()).unwrap();
        let f = params.filters;

        assert_eq!(f.region, RegionFilter::Only("부산".into()));
        assert_eq!(f.period, Some(Period::new(d(2024, 1, 1), d(2024, 3, 31))));
        assert!(f.sale_status.upcoming);
        assert!(!f.sale_status.ongoing);
        assert!(!f.sale_status.completed);
        assert_eq!(f.current_page, 2);
        assert!(params.refresh);
    }

    #[test]
    fn half_a_period_is_ignored() {
        let params = BoardParams::from_query(Some("start=2024-01-01"), today()).unwrap();
        assert_eq!(params.filters.period, None);
    }

    #[test]
    fn preset_sets_period() {
        let params = BoardParams::from_query(Some("preset=current_month"), today()).unwrap();
        assert_eq!(
            params.filters.period,
            Some(Period::new(d(2024, 6, 1), d(2024, 6, 30)))
        );
    }

    #[test]
    fn bad_input_is_rejected() {
        for q in ["region=Atlantis", "start=2024-01-01&end=later", "page=two", "preset=someday"] {
            assert!(
                matches!(BoardParams::from_query(Some(q), today()), Err(ServerError::BadRequest(_))),
                "{q}"
            );
        }
    }

    #[test]
    fn href_round_trips() {
        let filters = FilterState::default()
            .apply(FilterCommand::SetRegion(RegionFilter::Only("서울".into())))
            .apply(FilterCommand::SetPeriod(Some(Period::new(d(2024, 5, 1), d(2024, 5, 31)))))
            .apply(FilterCommand::SetSaleStatus(SaleStatus::Completed, false));

        let href = board_href(&filters, 3);
        let query = href.trim_start_matches("/?");
        let parsed = BoardParams::from_query(Some(query), today()).unwrap();

        assert_eq!(
            parsed.filters,
            filters.apply(FilterCommand::SetPage(3))
        );
        assert_eq!(board_href(&FilterState::default(), 1), "/");
    }
}
