//! Static metrics source
//!
//! Serves the fixed dashboard figures after the same simulated delay as the
//! waitlist record source.

use async_trait::async_trait;
use std::time::Duration;

use shared::{
    ActivityEntry, ComplianceItem, ComplianceStatus, Component, FinanceMetrics, HrMetrics, RevenueItem,
    ServiceMetrics, UserStatus, UserSummary, Verification, VerificationStatus, component_debug,
};
use waitlist::services::DEFAULT_LATENCY;

use crate::error::DashboardResult;
use crate::traits::MetricsSource;

const AVATARS: [&str; 5] = [
    "https://images.unsplash.com/photo-1500648767791-00dcc994a43e?w=100&h=100&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1494790108377-be9c29b29330?w=100&h=100&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1507003211169-0a1dd7228f2d?w=100&h=100&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?w=100&h=100&fit=crop&crop=face",
    "https://images.unsplash.com/photo-1506794778202-cad84cf45f1d?w=100&h=100&fit=crop&crop=face",
];

/// Metrics source returning fixed mock figures
#[derive(Clone, Debug)]
pub struct StaticMetricsSource {
    latency: Duration,
}

impl StaticMetricsSource {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self, what: &str) {
        component_debug!(Component::Metrics, latency_ms = self.latency.as_millis() as u64, "📊 Serving {}", what);
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for StaticMetricsSource {
    fn default() -> Self {
        Self::new(DEFAULT_LATENCY)
    }
}

fn activity(service: &str, status: &str, time: &str) -> ActivityEntry {
    ActivityEntry {
        service: service.to_string(),
        status: status.to_string(),
        time: time.to_string(),
    }
}

fn revenue(category: &str, amount: &str, percentage: u8) -> RevenueItem {
    RevenueItem {
        category: category.to_string(),
        amount: amount.to_string(),
        percentage,
    }
}

fn compliance(name: &str, status: ComplianceStatus) -> ComplianceItem {
    ComplianceItem {
        name: name.to_string(),
        status,
    }
}

fn verification(text: &str, status: VerificationStatus) -> Verification {
    Verification {
        text: text.to_string(),
        status,
    }
}

fn user(id: u32, name: &str, email: &str, role: &str) -> UserSummary {
    UserSummary {
        id,
        name: name.to_string(),
        email: email.to_string(),
        status: UserStatus::Active,
        role: role.to_string(),
        avatar: AVATARS[(id as usize - 1) % AVATARS.len()].to_string(),
    }
}

#[async_trait]
impl MetricsSource for StaticMetricsSource {
    async fn service_metrics(&self) -> DashboardResult<ServiceMetrics> {
        self.simulate_latency("service metrics").await;
        Ok(ServiceMetrics {
            active_services: 24,
            pending_requests: 7,
            completed_today: 15,
        })
    }

    async fn recent_activity(&self) -> DashboardResult<Vec<ActivityEntry>> {
        self.simulate_latency("recent activity").await;
        Ok(vec![
            activity("Payment Processing", "Active", "2 mins ago"),
            activity("User Authentication", "Active", "5 mins ago"),
            activity("Data Backup", "Completed", "10 mins ago"),
        ])
    }

    async fn finance_metrics(&self) -> DashboardResult<FinanceMetrics> {
        self.simulate_latency("finance metrics").await;
        Ok(FinanceMetrics {
            q4_revenue: "$2.4M".to_string(),
            projected_growth: "+18%".to_string(),
        })
    }

    async fn revenue_breakdown(&self) -> DashboardResult<Vec<RevenueItem>> {
        self.simulate_latency("revenue breakdown").await;
        Ok(vec![
            revenue("Product Sales", "$1.2M", 50),
            revenue("Services", "$800K", 33),
            revenue("Subscriptions", "$400K", 17),
        ])
    }

    async fn hr_metrics(&self) -> DashboardResult<HrMetrics> {
        self.simulate_latency("HR metrics").await;
        Ok(HrMetrics {
            total_employees: 248,
            new_hires: 12,
            open_positions: 8,
        })
    }

    async fn compliance_items(&self) -> DashboardResult<Vec<ComplianceItem>> {
        self.simulate_latency("compliance items").await;
        Ok(vec![
            compliance("Data Protection", ComplianceStatus::Compliant),
            compliance("Security Audit", ComplianceStatus::Compliant),
            compliance("Annual Review", ComplianceStatus::Pending),
            compliance("Privacy Policy", ComplianceStatus::Compliant),
        ])
    }

    async fn verifications(&self) -> DashboardResult<Vec<Verification>> {
        self.simulate_latency("verifications").await;
        Ok(vec![
            verification("Identity verification completed", VerificationStatus::Completed),
            verification("Document validation passed", VerificationStatus::Completed),
            verification("Background check in progress", VerificationStatus::Pending),
            verification("Reference check scheduled", VerificationStatus::Pending),
        ])
    }

    async fn users(&self) -> DashboardResult<Vec<UserSummary>> {
        self.simulate_latency("users").await;
        Ok(vec![
            user(1, "John Doe", "john.doe@example.com", "Admin"),
            user(2, "Jane Smith", "jane.smith@example.com", "Manager"),
            user(3, "Mike Johnson", "mike.j@example.com", "Developer"),
            user(4, "Sarah Williams", "sarah.w@example.com", "Designer"),
            user(5, "Tom Brown", "tom.brown@example.com", "Developer"),
        ])
    }
}
