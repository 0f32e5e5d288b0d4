//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to one endpoint.

pub mod decode;
pub mod encode;
pub mod health;

pub use decode::decode_handler;
pub use encode::encode_handler;
pub use health::health_handler;
