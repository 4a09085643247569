//! Dashboard data structures
//!
//! - `metrics`: per-page figures shown by the dashboard (service, finance, HR, compliance, users)
//! - `config`: the explicit dashboard configuration and process settings

pub mod config;
pub mod metrics;

pub use metrics::{
    ActivityEntry, ComplianceItem, ComplianceStatus, ComplianceSummary, FinanceMetrics, HrMetrics,
    RevenueItem, ServiceMetrics, StatCard, Trend, UserStatus, UserSummary, Verification,
    VerificationStatus,
};

pub use config::{DashboardConfig, DashboardSettings, NavItem, NavTab, User};
