//! Service tests for the waitlist crate
