//! # Shortlinkr
//!
//! An admission-controlled URL shortening service built with Axum.
//!
//! ## Architecture
//!
//! Two core components composed linearly, plus a thin HTTP boundary:
//!
//! - **Admission Limiter** ([`application::admission`]) - A counting limiter
//!   bounding concurrent operations; excess work is rejected immediately,
//!   never queued
//! - **Shortlink Engine** ([`application::services`]) - Owns the URL↔code
//!   mapping and the encode/decode algorithms; gates every call through the
//!   limiter
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware mapping
//!   engine errors to HTTP status codes
//!
//! ## Behavior Notes
//!
//! - Short codes are a deterministic 6-character URL-safe base64 prefix of
//!   the long URL; colliding URLs silently overwrite one another
//! - Decoding an unknown code is a success carrying the literal payload
//!   `"URL not found"`, not an error
//! - Mappings live in memory for the lifetime of the process
//!
//! ## Quick Start
//!
//! ```bash
//! export BASE_URL="http://short.ly"
//! export MAX_CONCURRENT_REQUESTS="16"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod error;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::admission::AdmissionLimiter;
    pub use crate::application::services::ShortenerService;
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
