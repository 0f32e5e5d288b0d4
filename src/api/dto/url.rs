//! DTOs for the encode and decode endpoints.
//!
//! Both endpoints share one request/response shape: a JSON object with a
//! single `url` field.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Request carrying the URL to encode or decode.
///
/// The non-blank check here is defense in depth; the engine re-validates
/// its input regardless of what the transport layer admits.
#[derive(Debug, Deserialize, Validate)]
pub struct UrlRequest {
    #[validate(custom(function = not_blank))]
    pub url: String,
}

/// Response carrying the resulting URL (short link, long URL, or the
/// not-found sentinel).
#[derive(Debug, Serialize)]
pub struct UrlResponse {
    pub url: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}
