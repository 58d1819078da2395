//! Deterministic fallback layout.
//!
//! Substituted whenever the model's reply cannot be used. The tree is fixed
//! apart from two inputs: the requested device is echoed on the root, and
//! the prompt is echoed in the subtitle so the user can see what the failed
//! attempt was about.

use serde_json::json;

use crate::layout::node::{Device, LayoutNode, NodeType};

/// Build the replacement tree for a failed generation.
pub fn fallback_layout(device: Device, prompt: &str) -> LayoutNode {
    let heading = LayoutNode {
        kind: NodeType::Heading,
        id: "title".to_string(),
        device: None,
        props: Some(json!({
            "text": "Nuevo layout desde IA",
            "level": 1,
            "align": "center",
        })),
        children: None,
    };

    let subtitle = LayoutNode {
        kind: NodeType::Text,
        id: "subtitle".to_string(),
        device: None,
        props: Some(json!({
            "text": format!("Prompt: {prompt}"),
            "align": "center",
        })),
        children: None,
    };

    let hero = LayoutNode {
        kind: NodeType::Section,
        id: "hero".to_string(),
        device: None,
        props: Some(json!({
            "padding": 32,
            "background": "#ffffff",
        })),
        children: Some(vec![heading, subtitle]),
    };

    LayoutNode {
        kind: NodeType::Page,
        id: "root".to_string(),
        device: Some(device),
        props: None,
        children: Some(vec![hero]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fallback_exact_shape() {
        let tree = fallback_layout(Device::Desktop, "Landing page for a bakery");

        let value = serde_json::to_value(&tree).unwrap();
        assert_eq!(
            value,
            json!({
                "type": "page",
                "id": "root",
                "device": "desktop",
                "children": [{
                    "type": "section",
                    "id": "hero",
                    "props": {"padding": 32, "background": "#ffffff"},
                    "children": [
                        {
                            "type": "heading",
                            "id": "title",
                            "props": {
                                "text": "Nuevo layout desde IA",
                                "level": 1,
                                "align": "center",
                            },
                        },
                        {
                            "type": "text",
                            "id": "subtitle",
                            "props": {
                                "text": "Prompt: Landing page for a bakery",
                                "align": "center",
                            },
                        },
                    ],
                }],
            })
        );
    }

    #[test]
    fn test_fallback_echoes_device() {
        let tree = fallback_layout(Device::Mobile, "anything");
        assert_eq!(tree.device, Some(Device::Mobile));
    }

    #[test]
    fn test_fallback_is_deterministic() {
        let a = serde_json::to_value(fallback_layout(Device::Desktop, "p")).unwrap();
        let b = serde_json::to_value(fallback_layout(Device::Desktop, "p")).unwrap();
        assert_eq!(a, b);
    }
}
