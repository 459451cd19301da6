//! # Routes
//!
//! Axum router configuration for the relay API.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

/// Create the main application router
///
/// Routes:
/// - GET  /                     - Liveness text
/// - GET  /health               - Health check (JSON)
/// - POST /api/payment          - Initiate a Pay Page payment
/// - GET  /api/check/{mtid}     - Check a transaction's status
/// - GET  /api/check[/]         - Missing transaction id (400)
pub fn create_router(state: AppState) -> Router {
    // The relay is called from browser clients on other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api_routes = Router::new()
        .route("/payment", post(handlers::initiate_payment))
        .route("/check", get(handlers::check_status_missing))
        .route("/check/", get(handlers::check_status_missing))
        .route("/check/{mtid}", get(handlers::check_status));

    Router::new()
        .route("/", get(handlers::root))
        .route("/health", get(handlers::health))
        .nest("/api", api_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
