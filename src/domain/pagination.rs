// src/domain/pagination.rs

/// One slice of a result list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// 1-based page actually shown, after clamping.
    pub number: usize,
    pub page_count: usize,
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_next(&self) -> bool {
        self.number < self.page_count
    }
}

/// `ceil(total / per_page)`. A zero page size is treated as one.
pub fn page_count(total: usize, per_page: usize) -> usize {
    total.div_ceil(per_page.max(1))
}

/// Pages past the end go back to page 1; page 0 is read as page 1. An
/// empty result always shows page 1.
pub fn clamp_page(requested: usize, page_count: usize) -> usize {
    if requested == 0 || requested > page_count.max(1) {
        1
    } else {
        requested
    }
}

/// Slice `items` into the requested page.
pub fn paginate<T: Clone>(items: &[T], requested: usize, per_page: usize) -> Page<T> {
    let per_page = per_page.max(1);
    let total_items = items.len();
    let page_count = page_count(total_items, per_page);
    let number = clamp_page(requested, page_count);

    let start = (number - 1).saturating_mul(per_page).min(total_items);
    let end = start.saturating_add(per_page).min(total_items);

    Page {
        items: items[start..end].to_vec(),
        number,
        page_count,
        total_items,
    }
}
