//! Pagination math for the listings view and the page-number strip under it.

use serde::{Deserialize, Serialize};

/// Listings shown per page when not configured otherwise.
pub const DEFAULT_ITEMS_PER_PAGE: usize = 3;

/// Number of pages needed for `total` items; never less than one.
pub fn total_pages(total: usize, page_size: usize) -> usize {
    let page_size = page_size.max(1);
    total.div_ceil(page_size).max(1)
}

/// Returns the 1-based `page` of `items`, or `None` when the page is out of range.
pub fn paginate<T>(items: &[T], page: usize, page_size: usize) -> Option<&[T]> {
    let page_size = page_size.max(1);
    if page < 1 || page > total_pages(items.len(), page_size) {
        return None;
    }
    let start = (page - 1) * page_size;
    let end = (start + page_size).min(items.len());
    Some(&items[start.min(end)..end])
}

/// One entry of the page-number strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Page(usize),
    Ellipsis,
}

/// First page, last page, and the current page with its neighbours; gaps collapse
/// into a single ellipsis.
///
/// `current = 5, total = 10` → `1 … 4 5 6 … 10`. Returns an empty strip when there
/// is only one page, since no navigation is rendered then.
pub fn page_window(current: usize, total: usize) -> Vec<PageMarker> {
    if total <= 1 {
        return Vec::new();
    }

    let mut pages = vec![1];
    let lo = current.saturating_sub(1).max(2);
    let hi = (current + 1).min(total - 1);
    for page in lo..=hi {
        pages.push(page);
    }
    pages.push(total);

    let mut markers = Vec::with_capacity(pages.len() + 2);
    let mut previous: Option<usize> = None;
    for page in pages {
        if let Some(prev) = previous {
            if page - prev > 1 {
                markers.push(PageMarker::Ellipsis);
            }
        }
        markers.push(PageMarker::Page(page));
        previous = Some(page);
    }
    markers
}

/// Position within the paged listing, as surfaced to the UI.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    pub current_page: usize,
    pub total_pages: usize,
    pub items_per_page: usize,
    pub has_previous: bool,
    pub has_next: bool,
    pub pages: Vec<PageMarker>,
}

impl PageInfo {
    pub fn new(current_page: usize, total_pages: usize, items_per_page: usize) -> Self {
        Self {
            current_page,
            total_pages,
            items_per_page,
            has_previous: current_page > 1,
            has_next: current_page < total_pages,
            pages: page_window(current_page, total_pages),
        }
    }
}
