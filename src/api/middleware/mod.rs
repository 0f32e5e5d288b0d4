//! HTTP middleware for request processing.
//!
//! Provides structured request/response logging.

pub mod tracing;
