//! HTTP conversion API.
//!
//! Exposes the pipeline to the upstream automation tool: a service
//! description on `/`, a self-test conversion on `/test`, and
//! single-record conversion on `/convert/single`. Fully stateless — each
//! request carries its own record and nothing outlives the response.

mod envelope;
mod routes;
mod settings;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use envelope::{ConvertFailure, ConvertSuccess};
pub use settings::{ServerSettings, Settings, get_configuration};

/// Assemble the service router with request tracing and permissive CORS.
/// The automation tool calls from browser contexts on arbitrary origins.
pub fn build_router() -> Router {
    Router::new()
        .route("/", get(routes::service_info))
        .route("/test", get(routes::test_convert))
        .route("/convert/single", post(routes::convert_single))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
}

/// Install the process-wide tracing subscriber. The `RUST_LOG` environment
/// variable overrides `log_level` when set.
pub fn init_tracing(log_level: &str) {
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
