//! JSON fixture record source
//!
//! Serves the bundled waitlist document (or one read from disk) after a
//! simulated network delay. Status updates are applied to the in-memory copy.

use async_trait::async_trait;
use std::path::Path;
use std::time::Duration;
use tokio::sync::RwLock;

use shared::{Component, Record, RecordId, RegistrationStatus, WaitlistData, component_debug};

use crate::error::{WaitlistError, WaitlistResult};
use crate::traits::RecordSource;

/// Waitlist document compiled into the binary
pub const BUNDLED_WAITLIST: &str = include_str!("../../data/waitlist.json");

/// Default simulated latency of every call
pub const DEFAULT_LATENCY: Duration = Duration::from_millis(100);

/// Record source backed by a static JSON document
pub struct JsonFixtureSource {
    data: RwLock<WaitlistData>,
    latency: Duration,
}

impl JsonFixtureSource {
    /// Source over already-parsed data
    pub fn new(data: WaitlistData, latency: Duration) -> Self {
        Self {
            data: RwLock::new(data),
            latency,
        }
    }

    /// Source over the bundled fixture
    pub fn bundled(latency: Duration) -> WaitlistResult<Self> {
        Self::from_json(BUNDLED_WAITLIST, latency)
    }

    /// Parse and validate a JSON document
    pub fn from_json(json: &str, latency: Duration) -> WaitlistResult<Self> {
        let data = WaitlistData::from_json(json)?;
        Ok(Self::new(data, latency))
    }

    /// Read the document from a file
    pub async fn from_file(path: impl AsRef<Path>, latency: Duration) -> WaitlistResult<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path).await?;
        component_debug!(Component::RecordSource, "📁 Read waitlist document from {}", path.display());
        Self::from_json(&json, latency)
    }

    pub fn latency(&self) -> Duration {
        self.latency
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

#[async_trait]
impl RecordSource for JsonFixtureSource {
    async fn fetch_all(&self) -> WaitlistResult<WaitlistData> {
        self.simulate_latency().await;
        let data = self.data.read().await;
        component_debug!(
            Component::RecordSource,
            providers = data.service_providers.len(),
            customers = data.customers.len(),
            "📋 Served waitlist data"
        );
        Ok(data.clone())
    }

    async fn update_status(&self, id: &RecordId, status: RegistrationStatus) -> WaitlistResult<Record> {
        self.simulate_latency().await;
        let mut data = self.data.write().await;
        let updated = data
            .update_status(id, status)
            .ok_or_else(|| WaitlistError::not_found(id))?;
        component_debug!(Component::RecordSource, "✏️ Record {} is now {}", id, status);
        Ok(updated)
    }
}
