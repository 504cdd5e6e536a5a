use crate::board::board_href;
use crate::domain::announcement::format_iso;
use crate::domain::region::{area_code, REGIONS};
use crate::domain::{FilterCommand, FilterState, PeriodPreset, RegionFilter, SaleStatus};
use crate::templates::components::button_link;
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn region_select(filters: &FilterState) -> Markup {
    let all = filters.apply(FilterCommand::SetRegion(RegionFilter::All));

    html! {
        section class="filters" {
            h3 { "지역 선택" }
            div class="region-grid" {
                (button_link("전체", &board_href(&all, 1), filters.region == RegionFilter::All))
                @for (name, _) in REGIONS {
                    @let next = filters.apply(FilterCommand::SetRegion(RegionFilter::Only(name.to_string())));
                    span title=(area_code(name).unwrap_or_default()) {
                        (button_link(name, &board_href(&next, 1), filters.region.matches(name) && filters.region != RegionFilter::All))
                    }
                }
            }
        }
    }
}

/// Keeps the filters a form does not edit itself.
fn hidden_filters(filters: &FilterState, keep_period: bool, keep_status: bool) -> Markup {
    html! {
        @if let RegionFilter::Only(region) = &filters.region {
            input type="hidden" name="region" value=(region);
        }
        @if keep_period {
            @if let Some(period) = &filters.period {
                input type="hidden" name="start" value=(format_iso(period.start));
                input type="hidden" name="end" value=(format_iso(period.end));
            }
        }
        @if keep_status {
            input type="hidden" name="status" value="1";
            @for status in SaleStatus::ALL {
                @if filters.sale_status.includes(status) {
                    input type="hidden" name=(status.key()) value="on";
                }
            }
        }
    }
}

pub fn period_select(filters: &FilterState, today: NaiveDate) -> Markup {
    let cleared = filters.apply(FilterCommand::SetPeriod(None));
    let start = filters.period.map(|p| format_iso(p.start)).unwrap_or_default();
    let end = filters.period.map(|p| format_iso(p.end)).unwrap_or_default();

    html! {
        section class="filters" {
            h3 { "공고 기간 선택" }
            div class="region-grid" {
                @for preset in PeriodPreset::ALL {
                    @let period = preset.period(today);
                    @let next = filters.apply(FilterCommand::SetPeriod(Some(period)));
                    (button_link(preset.label(), &board_href(&next, 1), filters.period == Some(period)))
                }
            }
            form method="get" action="/" style="margin-top: 0.75rem; display: flex; gap: 0.5rem; align-items: center;" {
                (hidden_filters(filters, false, true))
                label for="start" { "시작일" }
                input type="date" id="start" name="start" value=(start);
                label for="end" { "종료일" }
                input type="date" id="end" name="end" value=(end);
                button.btn type="submit" { "적용" }
                @if filters.period.is_some() {
                    a.btn href=(board_href(&cleared, 1)) { "기간 초기화" }
                }
            }
        }
    }
}

pub fn status_filter(filters: &FilterState) -> Markup {
    let reset = filters.apply(FilterCommand::Reset);

    html! {
        section class="filters" {
            h3 { "분양 상태" }
            form method="get" action="/" style="display: flex; gap: 1rem; align-items: center;" {
                (hidden_filters(filters, true, false))
                input type="hidden" name="status" value="1";
                @for status in SaleStatus::ALL {
                    label {
                        input
                            type="checkbox"
                            name=(status.key())
                            checked[filters.sale_status.includes(status)];
                        " " (status.icon()) " " (status.label())
                    }
                }
                button.btn type="submit" { "적용" }
                a.btn href=(board_href(&reset, 1)) { "전체 초기화" }
            }
        }
    }
}

pub fn filter_summary(filters: &FilterState) -> Markup {
    let (start, end) = match &filters.period {
        Some(p) => (format_iso(p.start), format_iso(p.end)),
        None => ("-".to_string(), "-".to_string()),
    };

    html! {
        p class="summary" {
            "지역: " (filters.region.label()) " | 공고기간: " (start) " ~ " (end)
        }
    }
}
