//! Service tests

mod static_metrics;
