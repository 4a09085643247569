//! Admin dashboard HTTP API
//!
//! Serves the dashboard pages and the waitlist table as JSON over axum, with
//! the record and metrics sources injected through traits.

pub mod dashboard_impl;
pub mod error;
pub mod services;
pub mod state;
pub mod traits;
pub mod types;
pub mod web;

// Re-export main types
pub use dashboard_impl::Dashboard;
pub use error::{DashboardError, DashboardResult};
pub use state::AppState;
pub use types::*;

// Re-export trait definitions
pub use traits::MetricsSource;

// Re-export service implementations
pub use services::StaticMetricsSource;
