//! Lightweight in-process metrics (dependency-free).
//!
//! Counters are stored as atomics and rendered in Prometheus text format by
//! whatever surface the embedding server exposes.

pub mod metrics;

pub use metrics::{CounterVec, EmitterMetrics};
