//! Service implementations

pub mod static_metrics;

pub use static_metrics::StaticMetricsSource;

#[cfg(test)]
mod tests;
