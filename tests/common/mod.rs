//! Shared utilities for integration testing.

use serde_json::{json, Value};
use tokio::net::TcpListener;

use layout_gen::config::AppConfig;
use layout_gen::http::HttpServer;

/// Build a config pointing at a stubbed completion endpoint.
pub fn test_config(endpoint: &str) -> AppConfig {
    let mut config = AppConfig::default();
    config.upstream.endpoint = endpoint.to_string();
    config.upstream.api_key = Some("test-key".to_string());
    config.observability.metrics_enabled = false;
    config
}

/// Spawn the service on an ephemeral port and return its base URL.
pub async fn spawn_app(config: AppConfig) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    format!("http://{}", addr)
}

/// Responses-style completion envelope carrying the given reply text.
pub fn responses_reply(text: &str) -> Value {
    json!({
        "id": "resp_123",
        "output": [{
            "type": "message",
            "content": [{"type": "output_text", "text": text}],
        }],
    })
}

/// Chat-style completion envelope carrying the given message content.
#[allow(dead_code)]
pub fn chat_reply(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop",
        }],
    })
}
