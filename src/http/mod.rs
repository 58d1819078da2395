//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, middleware stack)
//!     → request.rs (assign request ID)
//!     → generate.rs (credential check, body parse, upstream call, fallback)
//!     → response.rs (envelope serialization)
//!     → Send to client
//! ```

pub mod generate;
pub mod request;
pub mod response;
pub mod server;

pub use request::X_REQUEST_ID;
pub use response::LayoutReply;
pub use server::HttpServer;
