//! Waitlist management core
//!
//! Filtering, pagination and row selection over the waitlist records, plus the
//! record source abstraction and the loading lifecycle of the record store.

pub mod core;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;

// Re-export main types
pub use error::{WaitlistError, WaitlistResult};
pub use state::{LoadState, WaitlistState};
pub use traits::RecordSource;

pub use crate::core::{
    DEFAULT_PAGE_SIZE, DateRange, FilterSpec, Page, Selection, TableView, WaitlistView, apply_filters, page_window,
    paginate,
};

// Re-export service implementations
pub use services::JsonFixtureSource;
