//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the generation handler on every path
//! - Wire up middleware (panic recovery, CORS, request ID, tracing)
//! - Bind server to listener and serve until shutdown
//!
//! # Design Decisions
//! - Panic recovery sits closest to the handler so CORS and request-ID
//!   decoration still apply to the recovered reply
//! - Preflight requests are answered by the CORS layer and never reach the
//!   handler, so an OPTIONS probe can never trigger an upstream call

use axum::{
    http::{header, HeaderName, Method},
    middleware,
    routing::post,
    Router,
};
use tokio::net::TcpListener;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::config::AppConfig;
use crate::http::generate::generate_layout;
use crate::http::request::request_id_middleware;
use crate::http::response::handle_panic;
use crate::upstream::CompletionClient;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    pub client: CompletionClient,
}

/// HTTP server for the layout generation service.
pub struct HttpServer {
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: AppConfig) -> Self {
        let state = AppState {
            client: CompletionClient::new(&config.upstream),
        };

        let router = Self::build_router(state);
        Self { router }
    }

    /// Build the Axum router with all middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", post(generate_layout))
            .route("/", post(generate_layout))
            .with_state(state)
            .layer(CatchPanicLayer::custom(handle_panic))
            .layer(cors_layer())
            .layer(middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router.into_make_service())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}

/// Open CORS policy for the builder front-end.
///
/// The allowed header list matches what the hosted client sends alongside
/// its own auth plumbing.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::POST, Method::OPTIONS])
        .allow_headers([
            header::AUTHORIZATION,
            HeaderName::from_static("x-client-info"),
            HeaderName::from_static("apikey"),
            header::CONTENT_TYPE,
        ])
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
