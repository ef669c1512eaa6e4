//! parley-lambda
//!
//! API Gateway Lambda that relays chat messages to a text-generation
//! endpoint and returns the extended conversation.

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware as axum_mw;
use axum::routing::get;

pub mod config;
pub mod cors;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use state::AppState;

/// Build the router. Every path not listed here is a chat request, so the
/// function behaves the same whichever resource API Gateway maps to it.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(routes::health::health_check))
        .fallback(routes::chat::chat)
        .layer(DefaultBodyLimit::disable())
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors::cors_layer())
        .with_state(state)
}
