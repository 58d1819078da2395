//! AI Layout Generation Service
//!
//! A single-endpoint HTTP service that turns a natural-language prompt into a
//! JSON layout tree for the no-code builder, by way of an upstream LLM
//! completion API.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────────┐
//!                    │                  LAYOUT SERVICE                   │
//!                    │                                                   │
//!   Builder POST     │  ┌─────────┐    ┌──────────┐    ┌─────────────┐  │
//!   ─────────────────┼─▶│  http   │───▶│ upstream │───▶│ completion  │──┼──▶ LLM API
//!                    │  │ server  │    │  client  │    │   request   │  │
//!                    │  └─────────┘    └──────────┘    └─────────────┘  │
//!                    │        │                                         │
//!                    │        ▼                                         │
//!                    │  ┌──────────┐   parse ok    ┌────────────────┐   │
//!   Builder JSON     │  │  layout  │──────────────▶│  pass-through  │   │
//!   ◀────────────────┼──│  parse   │               └────────────────┘   │
//!                    │  └──────────┘   parse err   ┌────────────────┐   │
//!                    │        └───────────────────▶│    fallback    │   │
//!                    │                             └────────────────┘   │
//!                    │                                                   │
//!                    │  ┌─────────────────────────────────────────────┐ │
//!                    │  │           Cross-Cutting Concerns             │ │
//!                    │  │   config   ·   observability   ·   cors      │ │
//!                    │  └─────────────────────────────────────────────┘ │
//!                    └──────────────────────────────────────────────────┘
//! ```

use std::path::Path;

use tokio::net::TcpListener;

use layout_gen::config::loader;
use layout_gen::config::AppConfig;
use layout_gen::http::HttpServer;
use layout_gen::observability;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Optional config file as the first argument; defaults otherwise.
    let config = match std::env::args().nth(1) {
        Some(path) => loader::load_config(Path::new(&path))?,
        None => AppConfig::default(),
    };
    let config = loader::apply_env(config);

    observability::logging::init(&config.observability.log_level);

    tracing::info!("layout-gen v{} starting", env!("CARGO_PKG_VERSION"));
    tracing::info!(
        bind_address = %config.listener.bind_address,
        upstream_endpoint = %config.upstream.endpoint,
        model = %config.upstream.model,
        api_key_present = config.upstream.api_key.is_some(),
        "Configuration loaded"
    );

    if config.observability.metrics_enabled {
        if let Ok(addr) = config.observability.metrics_address.parse() {
            observability::metrics::init_metrics(addr);
        } else {
            tracing::error!(
                metrics_address = %config.observability.metrics_address,
                "Failed to parse metrics address"
            );
        }
    }

    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        address = %local_addr,
        "Listening for connections"
    );

    let server = HttpServer::new(config);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
