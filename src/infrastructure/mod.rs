//! Infrastructure Layer
//!
//! HTTP clients for the upstream APIs and Prometheus metrics.

pub mod clients;
pub mod metrics;
