//! Application layer implementing the shortening core.
//!
//! This layer owns the two components the HTTP handlers consume:
//!
//! - [`admission`] - Counting limiter bounding concurrent operations
//! - [`services`] - The encode/decode engine gated by the limiter

pub mod admission;
pub mod services;
