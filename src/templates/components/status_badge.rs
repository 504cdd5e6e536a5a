use crate::domain::SaleStatus;
use maud::{html, Markup};

pub fn status_badge(status: SaleStatus) -> Markup {
    html! {
        span class={ "badge badge-" (status.key()) } {
            span aria-hidden="true" { (status.icon()) }
            " "
            (status.label())
        }
    }
}
