//! DTOs for the health check endpoint.

use serde::Serialize;

/// Overall service health with per-component detail.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub checks: HealthChecks,
}

/// Component checks reported by the health endpoint.
#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub mapping_table: CheckStatus,
    pub permit_pool: CheckStatus,
}

/// Status of an individual component.
#[derive(Debug, Serialize)]
pub struct CheckStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
