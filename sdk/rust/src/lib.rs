//! Rust client SDK for the AI layout generation service.

pub mod client;

pub use client::{LayoutClient, LayoutReply, LayoutRequest};
