//! Push-based observability for spinwise
//!
//! This module provides observability through **outbound data only** - no HTTP server,
//! no incoming requests. Metrics are pushed as periodic structured JSON logs
//! (for Loki, Fluentd, CloudWatch) and kept in a Prometheus registry that can be
//! rendered on demand.

pub mod metrics;
pub mod reporter;

pub use metrics::Metrics;
pub use reporter::MetricsReporter;
