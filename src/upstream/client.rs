//! HTTP client for the completion API.

use serde_json::Value;

use crate::config::UpstreamConfig;
use crate::layout::LayoutRequest;
use crate::upstream::protocol::{CompletionReply, CompletionRequest, ReplyText, UpstreamError};

/// Client for the upstream completion API.
///
/// Wraps the pooled `reqwest::Client`; cloning is cheap and shares the
/// connection pool.
#[derive(Clone)]
pub struct CompletionClient {
    http: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: Option<String>,
}

impl CompletionClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        CompletionClient {
            http: reqwest::Client::new(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
        }
    }

    /// Whether a bearer credential was configured.
    pub fn has_credential(&self) -> bool {
        self.api_key.is_some()
    }

    /// Ask the model for a layout and extract the reply text.
    ///
    /// A non-success status line is logged but not fatal: the API delivers
    /// auth and quota failures as JSON bodies without reply text, and those
    /// resolve to `ReplyText::Missing` for the caller to absorb.
    pub async fn generate(&self, request: &LayoutRequest) -> Result<ReplyText, UpstreamError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(UpstreamError::MissingCredential)?;

        let payload = CompletionRequest::for_layout(&self.model, request);

        tracing::debug!(
            endpoint = %self.endpoint,
            model = %self.model,
            device = %request.device_mode,
            "Calling completion API"
        );

        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(api_key)
            .json(&payload)
            .send()
            .await
            .map_err(UpstreamError::Transport)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = %status, "Completion API returned non-success status");
        }

        let body: Value = response.json().await.map_err(UpstreamError::Body)?;
        let reply: CompletionReply = serde_json::from_value(body).unwrap_or_default();
        Ok(ReplyText::resolve(reply))
    }
}

// Manual Debug: the credential must never reach logs, panics included.
impl std::fmt::Debug for CompletionClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionClient")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
