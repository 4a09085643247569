//! Dashboard page data
//!
//! Figures and lists rendered by the service, finance, HR, users and
//! compliance pages.

use serde::{Deserialize, Serialize};

/// Direction indicator on a stat card
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Neutral,
}

/// Single figure with a caption
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct StatCard {
    pub title: String,
    pub value: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

impl StatCard {
    pub fn new(title: &str, value: impl ToString, description: &str) -> Self {
        Self {
            title: title.to_string(),
            value: value.to_string(),
            description: description.to_string(),
            trend: None,
        }
    }

    pub fn with_trend(mut self, trend: Trend) -> Self {
        self.trend = Some(trend);
        self
    }
}

/// Service dashboard headline figures
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServiceMetrics {
    pub active_services: u32,
    pub pending_requests: u32,
    pub completed_today: u32,
}

impl ServiceMetrics {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Active Services", self.active_services, "Running smoothly"),
            StatCard::new("Pending Requests", self.pending_requests, "Awaiting approval"),
            StatCard::new("Completed Today", self.completed_today, "Successfully processed"),
        ]
    }
}

/// Recent activity line on the service dashboard
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub service: String,
    pub status: String,
    pub time: String,
}

/// Finance forecast headline figures
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FinanceMetrics {
    pub q4_revenue: String,
    pub projected_growth: String,
}

impl FinanceMetrics {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Q4 Revenue", &self.q4_revenue, "Projected for this quarter"),
            StatCard::new("Projected Growth", &self.projected_growth, "Year over year increase").with_trend(Trend::Up),
        ]
    }
}

/// Revenue breakdown bar
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct RevenueItem {
    pub category: String,
    pub amount: String,
    pub percentage: u8,
}

/// Human resources headline figures
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct HrMetrics {
    pub total_employees: u32,
    pub new_hires: u32,
    pub open_positions: u32,
}

impl HrMetrics {
    pub fn stat_cards(&self) -> Vec<StatCard> {
        vec![
            StatCard::new("Total Employees", self.total_employees, "Across all departments"),
            StatCard::new("New Hires", self.new_hires, "Joined this month").with_trend(Trend::Up),
            StatCard::new("Open Positions", self.open_positions, "Actively recruiting"),
        ]
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum ComplianceStatus {
    Compliant,
    Pending,
    NonCompliant,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ComplianceItem {
    pub name: String,
    pub status: ComplianceStatus,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum VerificationStatus {
    Completed,
    Pending,
}

/// Recent verification step
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Verification {
    pub text: String,
    pub status: VerificationStatus,
}

/// Counts shown under the compliance list
#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceSummary {
    pub compliant: usize,
    pub pending: usize,
    pub total_checks: usize,
}

impl ComplianceSummary {
    pub fn from_items(items: &[ComplianceItem]) -> Self {
        let count = |status: ComplianceStatus| items.iter().filter(|item| item.status == status).count();
        Self {
            compliant: count(ComplianceStatus::Compliant),
            pending: count(ComplianceStatus::Pending),
            total_checks: items.len(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

/// Entry of the users page
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct UserSummary {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub status: UserStatus,
    pub role: String,
    pub avatar: String,
}
