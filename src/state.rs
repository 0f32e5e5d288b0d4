//! Shared application state injected into all HTTP handlers.

use std::sync::Arc;

use crate::application::services::ShortenerService;

/// Shared state: one engine instance constructed at startup.
///
/// The engine owns all mutable state (mapping table, permit pool); handlers
/// never hold state of their own.
#[derive(Clone)]
pub struct AppState {
    pub shortener: Arc<ShortenerService>,
}

impl AppState {
    pub fn new(shortener: Arc<ShortenerService>) -> Self {
        Self { shortener }
    }
}
