//! Paginator: fixed-size pages over a filtered list

use serde::Serialize;

/// Rows per page in the waitlist table
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Maximum number of page buttons shown at once
pub const PAGE_WINDOW: usize = 5;

/// One page of items plus the numbers needed to draw the controls
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub page_number: usize,
    pub page_size: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub items: Vec<T>,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_previous(&self) -> bool {
        self.page_number > 1
    }

    pub fn has_next(&self) -> bool {
        self.page_number < self.total_pages
    }

    /// Target of the "<" control, `None` when disabled
    pub fn previous_page(&self) -> Option<usize> {
        self.has_previous().then(|| self.page_number - 1)
    }

    /// Target of the ">" control, `None` when disabled
    pub fn next_page(&self) -> Option<usize> {
        self.has_next().then(|| self.page_number + 1)
    }

    /// Page numbers to draw as buttons
    pub fn window(&self) -> Vec<usize> {
        page_window(self.page_number, self.total_pages)
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            page_number: self.page_number,
            page_size: self.page_size,
            total_pages: self.total_pages,
            total_items: self.total_items,
            items: self.items.into_iter().map(f).collect(),
        }
    }
}

/// `ceil(len / page_size)`, zero for an empty list
pub fn total_pages(len: usize, page_size: usize) -> usize {
    len.div_ceil(effective_page_size(page_size))
}

fn effective_page_size(page_size: usize) -> usize {
    if page_size == 0 { DEFAULT_PAGE_SIZE } else { page_size }
}

/// Page actually shown for a requested page number
///
/// Page 0 and pages past the end fall back to page 1.
pub fn resolve_page(requested: usize, total_pages: usize) -> usize {
    if requested == 0 || requested > total_pages {
        1
    } else {
        requested
    }
}

/// Slice `items` into the requested page
pub fn paginate<T: Clone>(items: &[T], page: usize, page_size: usize) -> Page<T> {
    let page_size = effective_page_size(page_size);
    let total_pages = total_pages(items.len(), page_size);
    let page_number = resolve_page(page, total_pages);

    let start = ((page_number - 1) * page_size).min(items.len());
    let end = (start + page_size).min(items.len());

    Page {
        page_number,
        page_size,
        total_pages,
        total_items: items.len(),
        items: items[start..end].to_vec(),
    }
}

/// At most five page numbers around `current`, clamped to `[1, total_pages]`
pub fn page_window(current: usize, total_pages: usize) -> Vec<usize> {
    if total_pages <= PAGE_WINDOW {
        return (1..=total_pages).collect();
    }

    let half = PAGE_WINDOW / 2;
    let first = if current <= half + 1 {
        1
    } else if current + half >= total_pages {
        total_pages - PAGE_WINDOW + 1
    } else {
        current - half
    };

    (first..first + PAGE_WINDOW).collect()
}
