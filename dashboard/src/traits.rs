//! Service trait definitions for dependency injection
//!
//! Dashboard page data is served through this trait so handlers can be
//! tested against mocks.

use async_trait::async_trait;

use shared::{
    ActivityEntry, ComplianceItem, FinanceMetrics, HrMetrics, RevenueItem, ServiceMetrics, UserSummary,
    Verification,
};

use crate::error::DashboardResult;

/// Source of the figures and lists shown on the dashboard pages
#[mockall::automock]
#[async_trait]
pub trait MetricsSource: Send + Sync {
    /// Headline figures of the service dashboard
    async fn service_metrics(&self) -> DashboardResult<ServiceMetrics>;

    /// Recent activity list of the service dashboard
    async fn recent_activity(&self) -> DashboardResult<Vec<ActivityEntry>>;

    async fn finance_metrics(&self) -> DashboardResult<FinanceMetrics>;

    async fn revenue_breakdown(&self) -> DashboardResult<Vec<RevenueItem>>;

    async fn hr_metrics(&self) -> DashboardResult<HrMetrics>;

    async fn compliance_items(&self) -> DashboardResult<Vec<ComplianceItem>>;

    async fn verifications(&self) -> DashboardResult<Vec<Verification>>;

    async fn users(&self) -> DashboardResult<Vec<UserSummary>>;
}
