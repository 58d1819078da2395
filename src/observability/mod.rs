//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! Request path produces:
//!     → logging.rs (structured log events, request ID on every line)
//!     → metrics.rs (request counter + latency histogram by outcome)
//!
//! Consumers:
//!     → Log aggregation (stdout)
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - `RUST_LOG` overrides the configured level for ad hoc debugging
//! - Metric labels stay low-cardinality: the only label is the outcome
//! - Recording without an installed exporter is a no-op, so handlers never
//!   need to know whether metrics are enabled

pub mod logging;
pub mod metrics;
