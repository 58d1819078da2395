//! Layout generation handler.
//!
//! # Data Flow
//! ```text
//! POST (any path)
//!     → credential check (before the body is considered)
//!     → body parse (JSON → LayoutRequest)
//!     → upstream call → reply text
//!     → parse_layout → Ok: pass-through | Err: fallback tree
//!     → LayoutReply envelope
//! ```
//!
//! # Design Decisions
//! - A missing credential wins over a malformed body: it is checked first so
//!   operators see the configuration problem, not a client-side symptom
//! - Fallback substitution reports `success:true`; only the `outcome` log
//!   field and metric label distinguish it from a model-produced tree

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::HeaderMap,
    Json,
};

use crate::http::request::X_REQUEST_ID;
use crate::http::response::LayoutReply;
use crate::http::server::AppState;
use crate::layout::{fallback_layout, parse_layout, Layout, LayoutRequest};
use crate::observability::metrics::{self, GenerationOutcome};
use crate::upstream::UpstreamError;

/// Handle a layout generation request.
///
/// Every path out of this function is a well-formed envelope; errors ride
/// `success:false` and fallback substitution is invisible to the caller.
pub async fn generate_layout(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<LayoutRequest>, JsonRejection>,
) -> LayoutReply {
    let start_time = Instant::now();
    let request_id = headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    if !state.client.has_credential() {
        let err = UpstreamError::MissingCredential;
        tracing::error!(
            request_id = %request_id,
            error = %err,
            "Refusing request without upstream credential"
        );
        metrics::record_generation(GenerationOutcome::Error, start_time);
        return LayoutReply::failure(err.to_string());
    }

    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            tracing::error!(
                request_id = %request_id,
                error = %rejection,
                "Malformed request body"
            );
            metrics::record_generation(GenerationOutcome::Error, start_time);
            return LayoutReply::failure(rejection.body_text());
        }
    };

    tracing::info!(
        request_id = %request_id,
        device = %request.device_mode,
        prompt_chars = request.prompt.chars().count(),
        has_current_layout = request.current_layout.is_some(),
        "Generating layout"
    );

    let reply = match state.client.generate(&request).await {
        Ok(reply) => reply,
        Err(err) => {
            tracing::error!(request_id = %request_id, error = %err, "Upstream call failed");
            metrics::record_generation(GenerationOutcome::Error, start_time);
            return LayoutReply::failure(err.to_string());
        }
    };

    let shape = reply.shape();
    let text = reply.into_text();

    let (layout, outcome) = match parse_layout(&text) {
        Ok(tree) => (Layout::Generated(tree), GenerationOutcome::Ai),
        Err(reason) => {
            tracing::warn!(
                request_id = %request_id,
                shape = shape,
                reason = %reason,
                "Model reply unusable, substituting fallback layout"
            );
            let tree = fallback_layout(request.device_mode, &request.prompt);
            (Layout::Fallback(tree), GenerationOutcome::Fallback)
        }
    };

    tracing::info!(
        request_id = %request_id,
        outcome = outcome.as_str(),
        shape = shape,
        elapsed_ms = start_time.elapsed().as_millis() as u64,
        "Layout ready"
    );
    metrics::record_generation(outcome, start_time);

    LayoutReply::success(layout)
}
