//! API route configuration.

use crate::api::handlers::{decode_handler, encode_handler, health_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All service routes.
///
/// # Endpoints
///
/// - `POST /encode` - Shorten a long URL
/// - `POST /decode` - Resolve a short link
/// - `GET  /health` - Service health and component detail
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode", post(decode_handler))
        .route("/health", get(health_handler))
}
