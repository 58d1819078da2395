//! Wire types for the completion API.
//!
//! The request side is fixed by this service. The reply side is treated as a
//! black box: the API answers either in the responses shape (`output[..]`)
//! or the chat shape (`choices[..]`), and error replies carry neither. Every
//! reply field defaults, so any JSON body deserializes into something
//! [`ReplyText::resolve`] can work with.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

use crate::config::API_KEY_ENV;
use crate::layout::{Device, LayoutRequest};
use crate::upstream::prompt::SYSTEM_PROMPT;

/// Errors that abort a generation request.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The bearer credential was not configured.
    #[error("Missing {}", API_KEY_ENV)]
    MissingCredential,

    /// The completion API could not be reached.
    #[error("upstream request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The completion API answered with a body that was not JSON.
    #[error("upstream reply was not JSON: {0}")]
    Body(#[source] reqwest::Error),
}

/// Request payload for the completion API.
#[derive(Debug, Serialize)]
pub struct CompletionRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
    pub response_format: ResponseFormat,
}

/// One turn of the conversation sent upstream.
#[derive(Debug, Serialize)]
pub struct InputMessage {
    pub role: &'static str,
    pub content: MessageContent,
}

/// The system turn carries instruction text; the user turn carries the
/// structured request payload.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Payload(UserPayload),
}

/// Structured user turn: the prompt plus canvas context.
#[derive(Debug, Serialize)]
pub struct UserPayload {
    pub prompt: String,
    #[serde(rename = "deviceMode")]
    pub device_mode: Device,
    /// Always present on the wire; `null` when the canvas is empty.
    #[serde(rename = "currentLayout")]
    pub current_layout: Value,
}

/// Response-format hint asking for a bare JSON object.
#[derive(Debug, Serialize)]
pub struct ResponseFormat {
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl CompletionRequest {
    /// Build the upstream payload for a layout request.
    pub fn for_layout(model: &str, request: &LayoutRequest) -> Self {
        CompletionRequest {
            model: model.to_string(),
            input: vec![
                InputMessage {
                    role: "system",
                    content: MessageContent::Text(SYSTEM_PROMPT.to_string()),
                },
                InputMessage {
                    role: "user",
                    content: MessageContent::Payload(UserPayload {
                        prompt: request.prompt.clone(),
                        device_mode: request.device_mode,
                        current_layout: request.current_layout.clone().unwrap_or(Value::Null),
                    }),
                },
            ],
            response_format: ResponseFormat { kind: "json_object" },
        }
    }
}

/// Completion reply envelope, covering both shapes the API emits.
#[derive(Debug, Default, Deserialize)]
pub struct CompletionReply {
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

/// Responses-shape output item.
#[derive(Debug, Default, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<OutputContent>,
}

/// Responses-shape content block.
#[derive(Debug, Default, Deserialize)]
pub struct OutputContent {
    #[serde(default)]
    pub text: Option<String>,
}

/// Chat-shape choice.
#[derive(Debug, Default, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub message: ChatMessage,
}

/// Chat-shape message.
#[derive(Debug, Default, Deserialize)]
pub struct ChatMessage {
    #[serde(default)]
    pub content: Option<String>,
}

/// Reply text extracted from a completion envelope, tagged with the shape
/// that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplyText {
    Responses(String),
    Chat(String),
    Missing,
}

impl ReplyText {
    /// Extract reply text, preferring the responses shape.
    ///
    /// A present but empty string does not count; the next shape is tried
    /// instead, and `Missing` means neither carried usable text.
    pub fn resolve(reply: CompletionReply) -> Self {
        let responses_text = reply
            .output
            .into_iter()
            .next()
            .and_then(|item| item.content.into_iter().next())
            .and_then(|content| content.text);
        if let Some(text) = responses_text {
            if !text.is_empty() {
                return ReplyText::Responses(text);
            }
        }

        let chat_text = reply
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content);
        if let Some(text) = chat_text {
            if !text.is_empty() {
                return ReplyText::Chat(text);
            }
        }

        ReplyText::Missing
    }

    /// Envelope shape label for logs and metrics.
    pub fn shape(&self) -> &'static str {
        match self {
            ReplyText::Responses(_) => "responses",
            ReplyText::Chat(_) => "chat",
            ReplyText::Missing => "none",
        }
    }

    /// The carried text, empty when missing.
    pub fn into_text(self) -> String {
        match self {
            ReplyText::Responses(text) | ReplyText::Chat(text) => text,
            ReplyText::Missing => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn layout_request() -> LayoutRequest {
        serde_json::from_value(json!({
            "prompt": "Landing page for a bakery",
            "deviceMode": "desktop",
        }))
        .unwrap()
    }

    #[test]
    fn test_request_wire_shape() {
        let payload = CompletionRequest::for_layout("gpt-4.1-mini", &layout_request());

        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["model"], "gpt-4.1-mini");
        assert_eq!(value["input"][0]["role"], "system");
        assert_eq!(value["input"][0]["content"], SYSTEM_PROMPT);
        assert_eq!(
            value["input"][1],
            json!({
                "role": "user",
                "content": {
                    "prompt": "Landing page for a bakery",
                    "deviceMode": "desktop",
                    "currentLayout": null,
                },
            })
        );
        assert_eq!(value["response_format"], json!({"type": "json_object"}));
    }

    #[test]
    fn test_request_forwards_current_layout() {
        let mut request = layout_request();
        request.current_layout = Some(json!({"type": "page", "id": "root", "children": []}));

        let payload = CompletionRequest::for_layout("gpt-4.1-mini", &request);
        let value = serde_json::to_value(&payload).unwrap();
        assert_eq!(
            value["input"][1]["content"]["currentLayout"],
            json!({"type": "page", "id": "root", "children": []})
        );
    }

    #[test]
    fn test_resolve_prefers_responses_shape() {
        let reply: CompletionReply = serde_json::from_value(json!({
            "output": [{"content": [{"type": "output_text", "text": "{\"type\":\"page\"}"}]}],
            "choices": [{"message": {"content": "ignored"}}],
        }))
        .unwrap();

        assert_eq!(
            ReplyText::resolve(reply),
            ReplyText::Responses("{\"type\":\"page\"}".to_string())
        );
    }

    #[test]
    fn test_resolve_chat_shape() {
        let reply: CompletionReply = serde_json::from_value(json!({
            "choices": [{"message": {"role": "assistant", "content": "{}"}}],
        }))
        .unwrap();

        assert_eq!(ReplyText::resolve(reply), ReplyText::Chat("{}".to_string()));
    }

    #[test]
    fn test_resolve_empty_responses_text_falls_through() {
        let reply: CompletionReply = serde_json::from_value(json!({
            "output": [{"content": [{"text": ""}]}],
            "choices": [{"message": {"content": "{\"type\":\"page\"}"}}],
        }))
        .unwrap();

        assert_eq!(
            ReplyText::resolve(reply),
            ReplyText::Chat("{\"type\":\"page\"}".to_string())
        );
    }

    #[test]
    fn test_resolve_empty_envelope() {
        let reply: CompletionReply = serde_json::from_value(json!({})).unwrap();

        assert_eq!(ReplyText::resolve(reply), ReplyText::Missing);
    }

    #[test]
    fn test_error_body_resolves_to_missing() {
        // What the API sends on auth failure: no output, no choices.
        let reply: CompletionReply = serde_json::from_value(json!({
            "error": {"message": "Incorrect API key provided", "type": "invalid_request_error"},
        }))
        .unwrap();

        assert_eq!(ReplyText::resolve(reply), ReplyText::Missing);
    }

    #[test]
    fn test_shape_labels() {
        assert_eq!(ReplyText::Responses(String::new()).shape(), "responses");
        assert_eq!(ReplyText::Chat(String::new()).shape(), "chat");
        assert_eq!(ReplyText::Missing.shape(), "none");
    }

    #[test]
    fn test_missing_credential_message() {
        assert_eq!(
            UpstreamError::MissingCredential.to_string(),
            "Missing OPENAI_API_KEY"
        );
    }
}
