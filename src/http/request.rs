//! Request identity middleware.
//!
//! # Responsibilities
//! - Tag every inbound request with an `x-request-id` header
//! - Honor a client-supplied ID so front-end traces line up with server logs
//! - Echo the ID on the response for correlation
//!
//! # Design Decisions
//! - The ID is assigned before any handler runs so every log line can carry it

use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use uuid::Uuid;

/// Header carrying the per-request correlation ID.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Ensure the request carries an ID and echo it on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let header_value = match request.headers().get(X_REQUEST_ID) {
        Some(value) => value.clone(),
        // Generated UUIDs are always valid header values.
        None => HeaderValue::from_str(&Uuid::new_v4().to_string())
            .unwrap_or(HeaderValue::from_static("unknown")),
    };

    request
        .headers_mut()
        .insert(X_REQUEST_ID, header_value.clone());

    let mut response = next.run(request).await;
    response.headers_mut().insert(X_REQUEST_ID, header_value);
    response
}
