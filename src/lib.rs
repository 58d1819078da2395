//! AI Layout Generation Service Library

pub mod config;
pub mod http;
pub mod layout;
pub mod observability;
pub mod upstream;

pub use config::schema::AppConfig;
pub use http::HttpServer;
