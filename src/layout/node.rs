//! Typed layout nodes and the inbound request shape.
//!
//! # Responsibilities
//! - Define the node vocabulary the builder front-end understands
//! - Deserialize the client request (camelCase wire names)
//! - Serialize whichever tree the handler ends up returning

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Target device for a generated layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Device {
    Desktop,
    Mobile,
}

impl Device {
    pub fn as_str(&self) -> &'static str {
        match self {
            Device::Desktop => "desktop",
            Device::Mobile => "mobile",
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Node vocabulary of the builder canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeType {
    Page,
    Section,
    Heading,
    Text,
    Button,
}

impl NodeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            NodeType::Page => "page",
            NodeType::Section => "section",
            NodeType::Heading => "heading",
            NodeType::Text => "text",
            NodeType::Button => "button",
        }
    }
}

/// One node of a layout tree.
///
/// Optional fields are omitted from the serialized form entirely so that
/// trees built here look exactly like trees the model emits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutNode {
    #[serde(rename = "type")]
    pub kind: NodeType,
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<Device>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub props: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<LayoutNode>>,
}

/// Client request body for layout generation.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutRequest {
    pub prompt: String,
    #[serde(rename = "deviceMode")]
    pub device_mode: Device,
    /// Existing canvas state, forwarded to the model verbatim.
    #[serde(rename = "currentLayout", default)]
    pub current_layout: Option<Value>,
}

/// Tree placed in the `layout` field of a successful response.
///
/// Model-generated trees are opaque `Value`s; the fallback is typed. Both
/// serialize transparently, so the client sees a plain tree either way.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Layout {
    Generated(Value),
    Fallback(LayoutNode),
}
