use crate::templates::desktop_layout;
use maud::{html, Markup};

/// Plain error page with a way back to the board.
pub fn error_page(status: u16, message: &str) -> Markup {
    desktop_layout(
        &format!("오류 {status}"),
        html! {
            main class="container" {
                h1 { "오류 " (status) }
                p { (message) }
                p { a href="/" { "← 목록으로" } }
            }
        },
    )
}
