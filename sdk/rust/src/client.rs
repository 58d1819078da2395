use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Serialize)]
pub struct LayoutRequest {
    pub prompt: String,
    #[serde(rename = "deviceMode")]
    pub device_mode: String, // Should be "desktop" or "mobile"
    #[serde(rename = "currentLayout", skip_serializing_if = "Option::is_none")]
    pub current_layout: Option<Value>,
}

#[derive(Debug, Deserialize)]
pub struct LayoutReply {
    pub success: bool,
    pub layout: Option<Value>,
    pub error: Option<String>,
}

pub struct LayoutClient {
    client: Client,
    base_url: String,
}

impl LayoutClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.to_string(),
        }
    }

    /// Ask the service to generate a layout for a prompt.
    pub async fn generate(
        &self,
        req: LayoutRequest,
    ) -> Result<LayoutReply, Box<dyn std::error::Error>> {
        let resp = self.client.post(&self.base_url).json(&req).send().await?;

        let status = resp.status();
        let text = resp.text().await?;

        if !status.is_success() {
            return Err(format!("Service returned error status {}: {}", status, text).into());
        }

        match serde_json::from_str::<LayoutReply>(&text) {
            Ok(reply) => Ok(reply),
            Err(e) => Err(e.into()),
        }
    }
}
