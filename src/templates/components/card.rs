use crate::board::CardVm;
use crate::templates::components::status_badge;
use chrono::NaiveDate;
use maud::{html, Markup};

pub fn date_or_dash(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y.%m.%d").to_string())
        .unwrap_or_else(|| "-".to_string())
}

pub fn announcement_card(card: &CardVm) -> Markup {
    let a = &card.announcement;

    html! {
        article class="card" {
            h2 { (a.name) }
            (status_badge(card.status))
            dl {
                dt { "지역" }
                dd { @if a.region_name.is_empty() { "-" } @else { (a.region_name) } }
                dt { "모집공고일" }
                dd { (date_or_dash(a.recruitment_date)) }
                dt { "당첨자발표일" }
                dd { (date_or_dash(a.announcement_date)) }
                @if !a.house_type_name.is_empty() {
                    dt { "주택구분" }
                    dd { (a.house_type_name) }
                }
            }
            a.btn href=(a.id.detail_path()) { "상세보기" }
        }
    }
}
