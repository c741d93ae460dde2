//! Router tests for the HTTP service, driven in-process with `oneshot`.

#![cfg(feature = "server")]

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use rapid_keywords::pipeline::spec::ExtractorSpec;
use rapid_keywords::server::router;
use rapid_keywords::KeywordExtractor;
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(KeywordExtractor::new()))
}

async fn post_json(path: &str, body: &str) -> (StatusCode, Value) {
    post_json_to(app(), path, body).await
}

async fn post_json_to(app: Router, path: &str, body: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn status_lists_endpoints() {
    let request = Request::builder().uri("/").body(Body::empty()).unwrap();
    let response = app().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["status"], "API is running");
    assert!(body["endpoints"]["/extract_keywords_sinhala"].is_string());
    assert_eq!(body["languages"], json!(["en", "si"]));
}

#[tokio::test]
async fn extract_with_language_in_body() {
    let (status, body) = post_json(
        "/extract",
        r#"{ "text": "the cat sat on the mat the cat ran", "language": "en", "max_keywords": 3 }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "keywords": ["cat", "sat", "mat"] }));
}

#[tokio::test]
async fn english_endpoint_accepts_null_max() {
    let (status, body) = post_json(
        "/extract_keywords",
        r#"{ "text": "rust rust cargo", "max_keywords": null }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["rust", "cargo"]));
}

#[tokio::test]
async fn sinhala_endpoint_fixes_language() {
    let (status, body) = post_json(
        "/extract_keywords_sinhala",
        r#"{ "text": "පාසල පොත පාසල සඳහා", "maxKeywords": 5 }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["පාසල", "පොත"]));
}

#[tokio::test]
async fn no_keywords_is_success() {
    let (status, body) = post_json("/extract", r#"{ "text": "123 456 789", "language": "en" }"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!([]));
}

#[tokio::test]
async fn blank_text_is_rejected() {
    let (status, body) = post_json("/extract", r#"{ "text": "   ", "language": "en" }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "empty_input");
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn unsupported_language_is_rejected() {
    let (status, body) = post_json("/extract", r#"{ "text": "hola mundo", "language": "es" }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "unsupported_language");
}

#[tokio::test]
async fn missing_language_is_rejected() {
    let (status, body) = post_json("/extract", r#"{ "text": "hello there" }"#).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "missing_field");
}

#[tokio::test]
async fn malformed_json_is_rejected() {
    let (status, body) = post_json("/extract_keywords", "{ not json").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "malformed_request");
}

#[tokio::test]
async fn out_of_range_counts_are_clamped() {
    let (status, body) = post_json(
        "/extract",
        r#"{ "text": "cat cat dog", "language": "en", "max_keywords": -3 }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["cat"]));

    let (status, body) = post_json(
        "/extract",
        r#"{ "text": "cat cat dog", "language": "en", "max_keywords": 5.0 }"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["cat", "dog"]));
}

#[tokio::test]
async fn configured_language_fills_missing_field() {
    let spec = ExtractorSpec::from_json(r#"{ "v": 1, "language": "si" }"#).unwrap();
    let app = router(Arc::new(KeywordExtractor::from_spec(&spec).unwrap()));

    let (status, body) = post_json_to(app, "/extract", r#"{ "text": "පාසල පොත පාසල" }"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["keywords"], json!(["පාසල", "පොත"]));
}
