use maud::{html, Markup};

pub mod card;
pub mod filters;
pub mod pagination;
pub mod status_badge;

pub use card::announcement_card;
pub use filters::{filter_summary, period_select, region_select, status_filter};
pub use pagination::pagination;
pub use status_badge::status_badge;

/// Link styled as a toggle button.
pub fn button_link(label: &str, href: &str, selected: bool) -> Markup {
    html! {
        a.btn.selected[selected] href=(href) { (label) }
    }
}
