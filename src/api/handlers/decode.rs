//! Handler for the decode endpoint.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::url::{UrlRequest, UrlResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Decodes a short link back into its long URL.
///
/// # Endpoint
///
/// `POST /decode`
///
/// # Request Body
///
/// ```json
/// { "url": "http://short.ly/aHR0cD" }
/// ```
///
/// # Response
///
/// ```json
/// { "url": "http://example.com" }
/// ```
///
/// An unknown short code is not an error: the response is `200 OK` with the
/// literal payload `{ "url": "URL not found" }`.
///
/// # Errors
///
/// - **400 Bad Request** - blank input or wrong base URL prefix
/// - **429 Too Many Requests** - admission limit reached
pub async fn decode_handler(
    State(state): State<AppState>,
    Json(payload): Json<UrlRequest>,
) -> Result<Json<UrlResponse>, AppError> {
    payload.validate()?;

    let long_url = state.shortener.decode(&payload.url).await?;

    Ok(Json(UrlResponse { url: long_url }))
}
