//! Shared types for the admin dashboard
//!
//! Contains the waitlist record model, dashboard data structures, the explicit
//! dashboard configuration and logging setup used by every crate.

pub mod errors;
pub mod logging;
pub mod messages;
pub mod types;

pub use errors::*;
pub use types::*;

pub use logging::Component;

pub use messages::{
    // Dashboard pages
    ActivityEntry, ComplianceItem, ComplianceStatus, ComplianceSummary, FinanceMetrics, HrMetrics,
    RevenueItem, ServiceMetrics, StatCard, Trend, UserStatus, UserSummary, Verification,
    VerificationStatus,

    // Configuration types
    DashboardConfig, DashboardSettings, NavItem, NavTab, User,
};
