//! Configuration types
//!
//! `DashboardConfig` carries what the presentation layer needs to draw the
//! header and navigation. `DashboardSettings` carries process settings.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// Signed-in user shown in the dashboard header
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub location: String,
    pub avatar: String,
}

/// One entry of the top navigation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavTab {
    pub id: String,
    pub label: String,
    pub href: String,
}

impl NavTab {
    fn new(id: &str, label: &str, href: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            href: href.to_string(),
        }
    }
}

/// Navigation entry with its highlight state for a given path
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct NavItem {
    #[serde(flatten)]
    pub tab: NavTab,
    pub active: bool,
}

/// Header and navigation configuration passed to the presentation layer
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub current_user: User,
    pub tabs: Vec<NavTab>,
}

impl DashboardConfig {
    /// Navigation entries; a tab is active iff its href equals `path`
    pub fn navigation(&self, path: &str) -> Vec<NavItem> {
        self.tabs
            .iter()
            .map(|tab| NavItem {
                active: tab.href == path,
                tab: tab.clone(),
            })
            .collect()
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            current_user: User {
                id: "1".to_string(),
                name: "Max Smith".to_string(),
                email: "max.smith@example.com".to_string(),
                location: "London, UK".to_string(),
                avatar: "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?w=100&h=100&fit=crop&crop=face"
                    .to_string(),
            },
            tabs: vec![
                NavTab::new("service-dashboard", "Service Dashboard", "/dashboard"),
                NavTab::new("finance-forecast", "Finance Forecast", "/dashboard/finance"),
                NavTab::new("human-resources", "Human Resources", "/dashboard/hr"),
                NavTab::new("users", "Users", "/dashboard/users"),
                NavTab::new("compliances", "Compliances & Verification", "/dashboard/compliances"),
            ],
        }
    }
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Longest simulated latency accepted for mock data calls
const MAX_LATENCY_MS: u64 = 10_000;

/// Dashboard process settings
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DashboardSettings {
    pub bind_address: String,
    pub port: u16,
    pub log_level: String,
    /// Waitlist JSON document overriding the bundled fixture
    pub data_file: Option<PathBuf>,
    /// Simulated latency of every mock data call
    pub latency_ms: u64,
    /// Front-end assets served at `/`
    pub static_dir: Option<PathBuf>,
}

impl DashboardSettings {
    pub fn validate(&self) -> SharedResult<()> {
        if !LOG_LEVELS.contains(&self.log_level.as_str()) {
            return Err(SharedError::invalid_config("log_level", &self.log_level));
        }
        if self.latency_ms > MAX_LATENCY_MS {
            return Err(SharedError::invalid_config("latency_ms", self.latency_ms));
        }
        if self.bind_address.trim().is_empty() {
            return Err(SharedError::invalid_config("bind_address", &self.bind_address));
        }
        Ok(())
    }

    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    pub fn socket_address(&self) -> String {
        format!("{}:{}", self.bind_address, self.port)
    }
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            data_file: None,
            latency_ms: 100,
            static_dir: None,
        }
    }
}
