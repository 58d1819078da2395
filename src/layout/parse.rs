//! Parsing of model reply text into a layout tree.
//!
//! The model is instructed to answer with pure JSON whose root is a `page`
//! node. Only that much is checked here: the text must parse as JSON and the
//! top-level `type` must be `"page"`. Everything below the root passes
//! through untouched, so a model that invents extra fields or node types
//! does not lose its output.

use serde_json::Value;
use thiserror::Error;

use crate::layout::node::NodeType;

/// Why a model reply could not be used as a layout.
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("model reply was empty")]
    Empty,

    #[error("model reply is not valid JSON: {0}")]
    Syntax(#[from] serde_json::Error),

    #[error("root node type is `{found}`, expected `page`")]
    WrongRoot { found: String },
}

/// Parse reply text into a layout tree, validating only the root node type.
pub fn parse_layout(text: &str) -> Result<Value, LayoutError> {
    if text.trim().is_empty() {
        return Err(LayoutError::Empty);
    }

    let value: Value = serde_json::from_str(text)?;

    let root_type = value.get("type").and_then(Value::as_str);
    if root_type != Some(NodeType::Page.as_str()) {
        return Err(LayoutError::WrongRoot {
            found: root_type.unwrap_or("<none>").to_string(),
        });
    }

    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_page_passes_through_unchanged() {
        let text = r#"{"type":"page","id":"root","device":"desktop","children":[
            {"type":"section","id":"hero","children":[
                {"type":"heading","id":"h","props":{"text":"Hi","custom":true}}
            ]}
        ]}"#;

        let tree = parse_layout(text).unwrap();
        assert_eq!(tree["type"], "page");
        // Unknown nested fields survive.
        assert_eq!(tree["children"][0]["children"][0]["props"]["custom"], true);
    }

    #[test]
    fn test_junk_below_root_is_tolerated() {
        let text = r#"{"type":"page","id":"root","children":[{"type":"widget","id":"x"}]}"#;

        let tree = parse_layout(text).unwrap();
        assert_eq!(tree["children"][0]["type"], "widget");
    }

    #[test]
    fn test_non_json_is_syntax_error() {
        assert!(matches!(parse_layout("not json"), Err(LayoutError::Syntax(_))));
    }

    #[test]
    fn test_markdown_fenced_json_is_syntax_error() {
        let text = "```json\n{\"type\":\"page\",\"id\":\"root\"}\n```";

        assert!(matches!(parse_layout(text), Err(LayoutError::Syntax(_))));
    }

    #[test]
    fn test_wrong_root_type_is_rejected() {
        let result = parse_layout(r#"{"type":"section","id":"hero"}"#);

        match result {
            Err(LayoutError::WrongRoot { found }) => assert_eq!(found, "section"),
            other => panic!("expected WrongRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_root_type_is_rejected() {
        let result = parse_layout(r#"{"id":"root"}"#);

        match result {
            Err(LayoutError::WrongRoot { found }) => assert_eq!(found, "<none>"),
            other => panic!("expected WrongRoot, got {other:?}"),
        }
    }

    #[test]
    fn test_non_object_json_is_rejected() {
        assert!(matches!(parse_layout("null"), Err(LayoutError::WrongRoot { .. })));
        assert!(matches!(parse_layout("42"), Err(LayoutError::WrongRoot { .. })));
        assert!(matches!(parse_layout("[]"), Err(LayoutError::WrongRoot { .. })));
    }

    #[test]
    fn test_empty_and_whitespace_replies() {
        assert!(matches!(parse_layout(""), Err(LayoutError::Empty)));
        assert!(matches!(parse_layout("   \n\t"), Err(LayoutError::Empty)));
    }

    #[test]
    fn test_surrounding_whitespace_is_fine() {
        let tree = parse_layout("  {\"type\":\"page\",\"id\":\"root\"}\n").unwrap();
        assert_eq!(tree["id"], "root");
    }
}
