//! Metrics collection and exposition.
//!
//! # Metrics
//! - `layout_requests_total` (counter): finished requests by outcome
//! - `layout_request_duration_seconds` (histogram): latency by outcome
//!
//! # Design Decisions
//! - Outcome is the only label; prompts and error text never become labels
//! - The exporter serves its own scrape endpoint on a separate port

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::PrometheusBuilder;

/// How a generation request concluded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Model output was used as-is.
    Ai,
    /// Model output was discarded and the fallback tree substituted.
    Fallback,
    /// The request failed with `success:false`.
    Error,
}

impl GenerationOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            GenerationOutcome::Ai => "ai",
            GenerationOutcome::Fallback => "fallback",
            GenerationOutcome::Error => "error",
        }
    }
}

/// Install the Prometheus exporter and its scrape endpoint.
pub fn init_metrics(addr: SocketAddr) {
    let builder = PrometheusBuilder::new().with_http_listener(addr);

    match builder.install() {
        Ok(()) => {
            metrics::describe_counter!(
                "layout_requests_total",
                "Finished layout generation requests by outcome"
            );
            metrics::describe_histogram!(
                "layout_request_duration_seconds",
                "Layout generation latency by outcome"
            );
            tracing::info!(address = %addr, "Metrics exporter listening");
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to install metrics exporter");
        }
    }
}

/// Record one finished generation request.
pub fn record_generation(outcome: GenerationOutcome, start_time: Instant) {
    metrics::counter!("layout_requests_total", "outcome" => outcome.as_str()).increment(1);
    metrics::histogram!("layout_request_duration_seconds", "outcome" => outcome.as_str())
        .record(start_time.elapsed().as_secs_f64());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_labels() {
        assert_eq!(GenerationOutcome::Ai.as_str(), "ai");
        assert_eq!(GenerationOutcome::Fallback.as_str(), "fallback");
        assert_eq!(GenerationOutcome::Error.as_str(), "error");
    }

    #[test]
    fn test_record_without_exporter_is_noop() {
        // No recorder installed in tests; this must not panic.
        record_generation(GenerationOutcome::Fallback, Instant::now());
    }
}
