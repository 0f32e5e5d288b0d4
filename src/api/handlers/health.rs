//! Handler for the health check endpoint.

use axum::{Json, extract::State};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health with component detail.
///
/// # Endpoint
///
/// `GET /health`
///
/// The engine has no external dependencies, so this always reports healthy;
/// the check payload exposes the current mapping table size and admission
/// permit availability for operators.
///
/// # Response
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "mapping_table": { "status": "ok", "message": "Entries: 42" },
///     "permit_pool": { "status": "ok", "message": "Available: 2 of 2" }
///   }
/// }
/// ```
pub async fn health_handler(State(state): State<AppState>) -> Json<HealthResponse> {
    let shortener = &state.shortener;

    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            mapping_table: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!("Entries: {}", shortener.entry_count())),
            },
            permit_pool: CheckStatus {
                status: "ok".to_string(),
                message: Some(format!(
                    "Available: {} of {}",
                    shortener.available_permits(),
                    shortener.permit_limit()
                )),
            },
        },
    })
}
