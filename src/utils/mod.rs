//! Utility functions used across the application.
//!
//! - [`codegen`] - Deterministic short code derivation

pub mod codegen;
