// templates/pages/board.rs

use crate::board::{board_href, BoardView};
use crate::templates::components::{
    announcement_card, filter_summary, pagination, period_select, region_select, status_filter,
};
use crate::templates::desktop_layout;
use maud::{html, Markup};

pub const EMPTY_MESSAGE: &str = "검색 조건에 맞는 분양 정보가 없습니다.";
pub const LOADING_MESSAGE: &str = "분양 정보를 불러오는 중입니다. 잠시 후 새로고침해 주세요.";

fn refresh_href(view: &BoardView) -> String {
    let href = board_href(&view.filters, view.filters.current_page);
    if href.contains('?') {
        format!("{href}&refresh=1")
    } else {
        format!("{href}?refresh=1")
    }
}

pub fn board_page(view: &BoardView) -> Markup {
    desktop_layout(
        "청약 분양정보",
        html! {
            main class="container" {
                (region_select(&view.filters))
                (period_select(&view.filters, view.today))
                (status_filter(&view.filters))
                (filter_summary(&view.filters))

                @if let Some(message) = &view.error {
                    div class="notice error" role="alert" {
                        p { strong { "오류가 발생했습니다" } }
                        p { (message) }
                        a.btn href=(refresh_href(view)) { "다시 시도" }
                    }
                } @else if view.loading {
                    div class="notice" { (LOADING_MESSAGE) }
                } @else if view.is_empty_result() {
                    div class="notice" { p { (EMPTY_MESSAGE) } }
                } @else {
                    p class="summary" {
                        "검색 결과 " strong { (view.page.total_items) } "건"
                        @if view.match_count > 0 {
                            " (공고 " (view.match_count) "건 중)"
                        }
                    }
                    @if view.server_page_count > 1 {
                        p class="summary" { "조회 건수가 많아 일부 공고만 표시됩니다." }
                    }
                    div class="cards" {
                        @for card in &view.page.items {
                            (announcement_card(card))
                        }
                    }
                    (pagination(&view.filters, &view.page))
                }
            }
        },
    )
}
