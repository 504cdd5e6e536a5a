use crate::domain::format::{format_phone_number, format_year_month};
use crate::domain::{Announcement, SaleStatus};
use crate::templates::components::card::date_or_dash;
use crate::templates::components::status_badge;
use crate::templates::desktop_layout;
use maud::{html, Markup};

fn row(label: &str, value: &str) -> Markup {
    html! {
        @if !value.is_empty() {
            tr { th { (label) } td { (value) } }
        }
    }
}

pub fn detail_page(a: &Announcement, status: SaleStatus) -> Markup {
    let contract = match (a.contract_period.start, a.contract_period.end) {
        (None, None) => String::new(),
        (start, end) => format!("{} ~ {}", date_or_dash(start), date_or_dash(end)),
    };
    let households = if a.total_households > 0 {
        format!("{}세대", a.total_households)
    } else {
        String::new()
    };

    desktop_layout(
        &format!("{} 분양정보", a.name),
        html! {
            main class="container" {
                p { a href="/" { "← 목록으로" } }
                section class="card" {
                    h2 { (a.name) " 분양정보" }
                    (status_badge(status))
                    table {
                        (row("지역", &a.region_name))
                        (row("공급위치", &a.supply_address))
                        (row("주택구분", &a.house_type_name))
                        (row("주택상세구분", &a.house_detail_type_name))
                        (row("총공급세대수", &households))
                        (row("모집공고일", &date_or_dash(a.recruitment_date)))
                        (row("당첨자발표일", &date_or_dash(a.announcement_date)))
                        (row("계약기간", &contract))
                        (row("입주예정월", &format_year_month(&a.move_in_month)))
                        (row("사업주체", &a.business_entity))
                        (row("시공업체", &a.builder))
                        (row("문의처", &a.contact_org_name))
                        (row("전화번호", &format_phone_number(&a.phone_number)))
                        @if !a.homepage_url.is_empty() {
                            tr { th { "홈페이지" } td { a href=(a.homepage_url) rel="noopener" target="_blank" { (a.homepage_url) } } }
                        }
                    }
                }
                section class="card" style="margin-top: 1rem;" {
                    @if a.info_url.is_empty() {
                        p { "분양정보를 불러올 수 없습니다." }
                    } @else {
                        iframe src=(a.info_url) title={ (a.name) " 분양정보" } {}
                        p { a href=(a.info_url) rel="noopener" target="_blank" { "모집공고 새 창에서 보기" } }
                    }
                }
            }
        },
    )
}
