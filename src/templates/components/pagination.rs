use crate::board::{board_href, CardVm};
use crate::domain::{FilterState, Page};
use maud::{html, Markup};

pub fn pagination(filters: &FilterState, page: &Page<CardVm>) -> Markup {
    html! {
        nav class="pagination" aria-label="페이지" {
            @if page.has_previous() {
                a.btn href=(board_href(filters, page.number - 1)) { "이전" }
            } @else {
                span.btn.disabled { "이전" }
            }
            span { (page.number) " / " (page.page_count) }
            @if page.has_next() {
                a.btn href=(board_href(filters, page.number + 1)) { "다음" }
            } @else {
                span.btn.disabled { "다음" }
            }
        }
    }
}
