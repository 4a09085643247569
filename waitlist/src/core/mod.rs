//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod filter;
pub mod paginator;
pub mod selection;
pub mod table;

// Re-export commonly used types
pub use filter::{DateRange, FilterSpec, apply_filters, count_matching};
pub use paginator::{DEFAULT_PAGE_SIZE, PAGE_WINDOW, Page, page_window, paginate, resolve_page, total_pages};
pub use selection::Selection;
pub use table::{TableRow, TableView, WaitlistView};
