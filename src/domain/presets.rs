// src/domain/presets.rs

use crate::domain::filter::Period;
use chrono::{Datelike, Days, Months, NaiveDate};

/// Shortcut periods offered next to the date inputs. Weeks run Sunday
/// through Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodPreset {
    CurrentWeek,
    CurrentMonth,
    NextWeek,
    NextMonth,
}

impl PeriodPreset {
    pub const ALL: [PeriodPreset; 4] = [
        PeriodPreset::CurrentWeek,
        PeriodPreset::CurrentMonth,
        PeriodPreset::NextWeek,
        PeriodPreset::NextMonth,
    ];

    pub fn key(self) -> &'static str {
        match self {
            PeriodPreset::CurrentWeek => "current_week",
            PeriodPreset::CurrentMonth => "current_month",
            PeriodPreset::NextWeek => "next_week",
            PeriodPreset::NextMonth => "next_month",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PeriodPreset::CurrentWeek => "이번 주",
            PeriodPreset::CurrentMonth => "이번 달",
            PeriodPreset::NextWeek => "다음 주",
            PeriodPreset::NextMonth => "다음 달",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|preset| preset.key() == key)
    }

    pub fn period(self, today: NaiveDate) -> Period {
        match self {
            PeriodPreset::CurrentWeek => week_of(today),
            PeriodPreset::NextWeek => week_of(today + Days::new(7)),
            PeriodPreset::CurrentMonth => month_of(today),
            PeriodPreset::NextMonth => month_of(first_of_month(today) + Months::new(1)),
        }
    }
}

fn week_of(day: NaiveDate) -> Period {
    let sunday = day - Days::new(u64::from(day.weekday().num_days_from_sunday()));
    Period::new(sunday, sunday + Days::new(6))
}

fn first_of_month(day: NaiveDate) -> NaiveDate {
    day.with_day(1).unwrap_or(day)
}

fn month_of(day: NaiveDate) -> Period {
    let first = first_of_month(day);
    let last = (first + Months::new(1)).pred_opt().unwrap_or(first);
    Period::new(first, last)
}
