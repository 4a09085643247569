//! Tests for the static metrics source

use std::time::Duration;

use shared::{ComplianceStatus, ComplianceSummary, VerificationStatus};

use crate::services::StaticMetricsSource;
use crate::traits::MetricsSource;

fn source() -> StaticMetricsSource {
    StaticMetricsSource::new(Duration::ZERO)
}

#[tokio::test]
async fn test_service_metrics_and_activity() {
    let source = source();
    let metrics = source.service_metrics().await.unwrap();
    assert_eq!(metrics.active_services, 24);
    assert_eq!(metrics.pending_requests, 7);
    assert_eq!(metrics.completed_today, 15);

    let activity = source.recent_activity().await.unwrap();
    assert_eq!(activity.len(), 3);
    assert_eq!(activity[2].service, "Data Backup");
    assert_eq!(activity[2].status, "Completed");
}

#[tokio::test]
async fn test_revenue_breakdown_sums_to_whole() {
    let breakdown = source().revenue_breakdown().await.unwrap();
    let total: u32 = breakdown.iter().map(|item| item.percentage as u32).sum();
    assert_eq!(total, 100);
}

#[tokio::test]
async fn test_compliance_summary_from_items() {
    let source = source();
    let items = source.compliance_items().await.unwrap();
    let summary = ComplianceSummary::from_items(&items);

    assert_eq!(summary.compliant, 3);
    assert_eq!(summary.pending, 1);
    assert_eq!(summary.total_checks, 4);
    assert!(items.iter().all(|item| item.status != ComplianceStatus::NonCompliant));

    let verifications = source.verifications().await.unwrap();
    let completed = verifications
        .iter()
        .filter(|v| v.status == VerificationStatus::Completed)
        .count();
    assert_eq!(completed, 2);
}

#[tokio::test]
async fn test_users_have_distinct_avatars() {
    let users = source().users().await.unwrap();
    assert_eq!(users.len(), 5);
    assert_eq!(users[0].name, "John Doe");
    assert_eq!(users[0].role, "Admin");

    let mut avatars: Vec<&str> = users.iter().map(|user| user.avatar.as_str()).collect();
    avatars.dedup();
    assert_eq!(avatars.len(), 5);
}

#[test]
fn test_default_uses_standard_latency() {
    assert_eq!(StaticMetricsSource::default().latency(), Duration::from_millis(100));
    let finance = tokio_test::block_on(source().finance_metrics()).unwrap();
    assert_eq!(finance.q4_revenue, "$2.4M");
    assert_eq!(finance.projected_growth, "+18%");
}
