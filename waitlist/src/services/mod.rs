//! Service implementations
//!
//! Real implementations of the service traits

pub mod fixture_source;

pub use fixture_source::{BUNDLED_WAITLIST, DEFAULT_LATENCY, JsonFixtureSource};

#[cfg(test)]
mod tests;
