//! Completion API integration.
//!
//! # Responsibilities
//! - Build the outbound payload (system instruction + structured user turn)
//! - Call the completion endpoint with bearer authentication
//! - Extract reply text from either envelope shape the API is known to emit
//!
//! # Design Decisions
//! - The upstream status line is never treated as fatal: error bodies are
//!   JSON without reply text, and those are absorbed by the fallback path
//! - Envelope deserialization is best-effort; an unrecognizable body resolves
//!   to `ReplyText::Missing` rather than an error

pub mod client;
pub mod prompt;
pub mod protocol;

pub use client::CompletionClient;
pub use prompt::SYSTEM_PROMPT;
pub use protocol::{CompletionReply, CompletionRequest, ReplyText, UpstreamError};
