//! Response envelope shared by every handler path.
//!
//! # Responsibilities
//! - Serialize the `{success, layout}` / `{success, error}` envelope
//! - Map handler panics to the generic error reply
//!
//! # Design Decisions
//! - Every reply is HTTP 200: errors ride the envelope, not the status line,
//!   and the builder front-end keys off `success`
//! - Panic payloads are logged server-side but never reach the caller

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::layout::Layout;

/// Body of every generation response.
#[derive(Debug, Serialize)]
pub struct LayoutReply {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<Layout>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl LayoutReply {
    pub fn success(layout: Layout) -> Self {
        LayoutReply {
            success: true,
            layout: Some(layout),
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        LayoutReply {
            success: false,
            layout: None,
            error: Some(message.into()),
        }
    }
}

impl IntoResponse for LayoutReply {
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}

/// Last-resort handler for panics escaping the request path.
pub fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "non-string panic payload".to_string()
    };

    tracing::error!(detail = %detail, "Handler panicked");

    LayoutReply::failure("Unknown error").into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{fallback_layout, Device};
    use serde_json::json;

    #[test]
    fn test_success_envelope_shape() {
        let reply = LayoutReply::success(Layout::Generated(json!({"type": "page", "id": "root"})));

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            value,
            json!({"success": true, "layout": {"type": "page", "id": "root"}})
        );
    }

    #[test]
    fn test_failure_envelope_shape() {
        let reply = LayoutReply::failure("Missing OPENAI_API_KEY");

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(
            value,
            json!({"success": false, "error": "Missing OPENAI_API_KEY"})
        );
    }

    #[test]
    fn test_fallback_serializes_like_generated() {
        let reply = LayoutReply::success(Layout::Fallback(fallback_layout(Device::Mobile, "p")));

        let value = serde_json::to_value(&reply).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["layout"]["type"], "page");
        assert_eq!(value["layout"]["device"], "mobile");
    }

    #[tokio::test]
    async fn test_panic_reply_is_generic() {
        let response = handle_panic(Box::new("boom"));

        assert_eq!(response.status(), 200);
        let bytes = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(value, json!({"success": false, "error": "Unknown error"}));
    }
}
