//! Test helpers for waitlist integration tests

#![allow(dead_code)]

use std::time::Duration;

use shared::{Record, WaitlistData};
use waitlist::{JsonFixtureSource, WaitlistState};

/// Loaded state over the given data with no simulated latency
pub async fn create_loaded_state(data: WaitlistData) -> WaitlistState<JsonFixtureSource> {
    let mut state = WaitlistState::new(JsonFixtureSource::new(data, Duration::ZERO));
    state.load().await.expect("in-memory source always loads");
    state
}

/// Loaded state over the bundled fixture
pub async fn create_bundled_state() -> WaitlistState<JsonFixtureSource> {
    let source = JsonFixtureSource::bundled(Duration::ZERO).expect("bundled fixture is valid");
    let mut state = WaitlistState::new(source);
    state.load().await.expect("bundled fixture loads");
    state
}

pub fn ids(records: &[Record]) -> Vec<String> {
    records.iter().map(|record| record.id.to_string()).collect()
}
