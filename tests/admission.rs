//! Admission control behavior across the engine and HTTP boundary.
//!
//! These tests use the engine's injected-latency constructor so that admitted
//! operations hold their permits long enough for an overflowing call to
//! observe an exhausted pool.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use serde_json::json;
use shortlinkr::application::services::ShortenerService;
use shortlinkr::error::AppError;

const HOLD: Duration = Duration::from_millis(200);
const STAGGER: Duration = Duration::from_millis(50);

#[tokio::test]
async fn test_engine_rejects_excess_and_reclaims_permits() {
    let service = Arc::new(ShortenerService::with_delay(common::BASE_URL, 2, HOLD));

    // Fill both permits with long-running encodes
    let first = tokio::spawn({
        let service = service.clone();
        async move { service.encode("http://example.com/1").await }
    });
    let second = tokio::spawn({
        let service = service.clone();
        async move { service.encode("http://example.com/2").await }
    });

    // Give both tasks time to acquire their permits, then overflow
    tokio::time::sleep(STAGGER).await;
    let err = service.encode("http://example.com/3").await.unwrap_err();
    assert!(matches!(err, AppError::Overloaded));

    // The admitted calls run to completion
    assert!(first.await.unwrap().is_ok());
    assert!(second.await.unwrap().is_ok());

    // No permit leaked: the pool is full again and new calls are admitted
    assert_eq!(service.available_permits(), 2);
    assert!(service.encode("http://example.com/4").await.is_ok());
}

#[tokio::test]
async fn test_decode_is_gated_by_the_same_pool() {
    let service = Arc::new(ShortenerService::with_delay(common::BASE_URL, 1, HOLD));

    let encode = tokio::spawn({
        let service = service.clone();
        async move { service.encode("http://example.com").await }
    });

    tokio::time::sleep(STAGGER).await;
    let err = service
        .decode("http://short.ly/aHR0cD")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Overloaded));

    assert!(encode.await.unwrap().is_ok());
    assert_eq!(service.available_permits(), 1);
}

#[tokio::test]
async fn test_overflowing_http_call_returns_429() {
    let server = common::make_server(common::create_delayed_state(2, HOLD));

    let first = async {
        server
            .post("/encode")
            .json(&json!({ "url": "http://example.com/1" }))
            .await
    };
    let second = async {
        server
            .post("/encode")
            .json(&json!({ "url": "http://example.com/2" }))
            .await
    };
    let overflow = async {
        tokio::time::sleep(STAGGER).await;
        server
            .post("/encode")
            .json(&json!({ "url": "http://example.com/3" }))
            .await
    };

    let (first, second, overflow) = tokio::join!(first, second, overflow);

    first.assert_status_ok();
    second.assert_status_ok();
    overflow.assert_status(StatusCode::TOO_MANY_REQUESTS);

    let body = overflow.json::<serde_json::Value>();
    assert_eq!(body["error"]["code"], "too_many_requests");
    assert_eq!(body["error"]["message"], "Too many concurrent requests");

    // Permits were reclaimed; a subsequent call is admitted
    let after = server
        .post("/encode")
        .json(&json!({ "url": "http://example.com/4" }))
        .await;
    after.assert_status_ok();
}
