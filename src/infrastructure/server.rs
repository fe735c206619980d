// Server module - Provides the HTTP front end of the shelf sorter
// Used by the CLI (main.rs) and by the integration tests

use axum::http::HeaderValue;
use axum::routing::get;
use axum::Router;
use std::net::{SocketAddr, TcpListener};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::domain::DomainError;
use crate::infrastructure::{config::Config, AppState};

/// Build the full router: API under /api, OpenAPI document, CORS and tracing
pub fn build_router(config: Config) -> Router {
    let cors = cors_layer(&config.cors_allowed_origins);
    let state = AppState::new(config);

    Router::new()
        .route("/api-docs/openapi.json", get(api::openapi_json))
        .nest("/api", api::api_router(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

// No configured origins means any origin is allowed
fn cors_layer(origins: &[String]) -> CorsLayer {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    if origins.is_empty() {
        return layer.allow_origin(Any);
    }

    let mut allowed = Vec::new();
    for origin in origins {
        match origin.parse::<HeaderValue>() {
            Ok(v) => allowed.push(v),
            Err(e) => tracing::error!("Failed to parse CORS origin '{}': {}", origin, e),
        }
    }
    layer.allow_origin(allowed)
}

/// Find an available port starting from the preferred port
pub fn find_available_port(preferred_port: u16) -> Option<u16> {
    // Try preferred port first
    if TcpListener::bind(("0.0.0.0", preferred_port)).is_ok() {
        return Some(preferred_port);
    }

    // Scan next 100 ports
    ((preferred_port.saturating_add(1))..(preferred_port.saturating_add(100)))
        .find(|&port| TcpListener::bind(("0.0.0.0", port)).is_ok())
}

/// Serve the API until the process is stopped
pub async fn run_server(config: Config) -> Result<(), DomainError> {
    let port = find_available_port(config.port)
        .ok_or_else(|| DomainError::Io(format!("No free port near {}", config.port)))?;

    if port != config.port {
        tracing::warn!(
            "Preferred port {} was not available, using port {} instead",
            config.port,
            port
        );
    }

    let app = build_router(config);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| DomainError::Io(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("loc-shelf server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| DomainError::Internal(format!("HTTP server error: {}", e)))
}
