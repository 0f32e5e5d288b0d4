//! Handler for the encode endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Encodes a long URL into a short link.
///
/// # Endpoint
///
/// `POST /encode`
///
/// # Request Body
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "http://short.ly/aHR0cD" }
/// ```
///
/// # Errors
///
/// - **400 Bad Request** - blank, unparseable, or host-less URL
/// - **429 Too Many Requests** - admission limit reached
pub async fn encode_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let short_url = state.shortener.encode(&payload.url).await?;

    Ok(Json(UrlResponse { url: short_url }))
}
