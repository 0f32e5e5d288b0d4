#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use axum::{
    Router,
    routing::{get, post},
};
use axum_test::TestServer;
use shortlinkr::api::handlers::{decode_handler, encode_handler, health_handler};
use shortlinkr::application::services::ShortenerService;
use shortlinkr::state::AppState;

pub const BASE_URL: &str = "http://short.ly";

pub fn create_test_state(max_concurrent_requests: usize) -> AppState {
    AppState::new(Arc::new(ShortenerService::new(
        BASE_URL,
        max_concurrent_requests,
    )))
}

/// State whose engine sleeps for `delay` while holding its admission permit,
/// so tests can observe the admission window.
pub fn create_delayed_state(max_concurrent_requests: usize, delay: Duration) -> AppState {
    AppState::new(Arc::new(ShortenerService::with_delay(
        BASE_URL,
        max_concurrent_requests,
        delay,
    )))
}

pub fn make_server(state: AppState) -> TestServer {
    let app = Router::new()
        .route("/encode", post(encode_handler))
        .route("/decode", post(decode_handler))
        .route("/health", get(health_handler))
        .with_state(state);
    TestServer::new(app).unwrap()
}
