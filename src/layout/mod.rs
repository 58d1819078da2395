//! Layout tree model, parsing, and the deterministic fallback.
//!
//! # Data Flow
//! ```text
//! model reply text
//!     → parse.rs (JSON parse + top-level `page` check)
//!     → Ok: the model's tree, passed through untouched
//!     → Err: fallback.rs builds the fixed replacement tree
//! ```
//!
//! # Design Decisions
//! - Trees the model produced stay `serde_json::Value`: only the root tag is
//!   ever validated, nested nodes are forwarded as-is
//! - Trees this service produces (the fallback) are built from typed nodes

pub mod fallback;
pub mod node;
pub mod parse;

pub use fallback::fallback_layout;
pub use node::{Device, Layout, LayoutNode, LayoutRequest, NodeType};
pub use parse::{parse_layout, LayoutError};
