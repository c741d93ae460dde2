//! HTTP service
//!
//! | Method | Path | Body |
//! |--------|------|------|
//! | `GET`  | `/` | status and endpoint listing |
//! | `POST` | `/extract` | `{ text, language, max_keywords? }` |
//! | `POST` | `/extract_keywords` | `{ text, max_keywords? }`, English |
//! | `POST` | `/extract_keywords_sinhala` | `{ text, max_keywords? }`, Sinhala |
//!
//! Success is `200 { "keywords": [...] }` (possibly empty); request errors
//! are `400 { "error": ..., "code": ... }`.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::api::{handle_extract, ErrorResponse, ExtractRequest};
use crate::errors::ExtractError;
use crate::extractor::KeywordExtractor;
use crate::pipeline::error_code::ErrorCode;
use crate::types::Language;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

/// Listen address for [`serve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServerConfig {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Clone)]
struct AppState {
    extractor: Arc<KeywordExtractor>,
}

/// Error returned by handlers, rendered as `400 { error, code }`.
#[derive(Debug)]
pub struct ApiError(ErrorResponse);

impl From<ExtractError> for ApiError {
    fn from(err: ExtractError) -> Self {
        Self(ErrorResponse::from(&err))
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self(ErrorResponse::new(
            ErrorCode::MalformedRequest,
            format!("Invalid JSON data: {}", rejection.body_text()),
        ))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self.0)).into_response()
    }
}

/// Build the router around a shared extractor.
pub fn router(extractor: Arc<KeywordExtractor>) -> Router {
    Router::new()
        .route("/", get(status))
        .route("/extract", post(extract_any))
        .route("/extract_keywords", post(extract_english))
        .route("/extract_keywords_sinhala", post(extract_sinhala))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(AppState { extractor })
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, extractor: Arc<KeywordExtractor>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr()).await?;
    let local: SocketAddr = listener.local_addr()?;
    tracing::info!(%local, "keyword service listening");

    axum::serve(listener, router(extractor))
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await
}

async fn status() -> Json<serde_json::Value> {
    Json(json!({
        "status": "API is running",
        "languages": Language::ALL.iter().map(Language::as_str).collect::<Vec<_>>(),
        "endpoints": {
            "/extract": "Extract keywords; language given in the request body",
            "/extract_keywords": "Extract keywords from English text",
            "/extract_keywords_sinhala": "Extract keywords from Sinhala text",
        }
    }))
}

async fn extract_any(
    State(state): State<AppState>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    run(&state, body, None)
}

async fn extract_english(
    State(state): State<AppState>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    run(&state, body, Some(Language::English))
}

async fn extract_sinhala(
    State(state): State<AppState>,
    body: Result<Json<ExtractRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    run(&state, body, Some(Language::Sinhala))
}

fn run(
    state: &AppState,
    body: Result<Json<ExtractRequest>, JsonRejection>,
    language: Option<Language>,
) -> Result<Response, ApiError> {
    let Json(request) = body.map_err(|rejection| {
        tracing::warn!(error = %rejection.body_text(), "invalid JSON data received");
        ApiError::from(rejection)
    })?;

    match handle_extract(&state.extractor, &request, language) {
        Ok(response) => {
            tracing::debug!(count = response.keywords.len(), "keywords extracted");
            Ok(Json(response).into_response())
        }
        Err(err) => {
            tracing::warn!(code = %err.code(), error = %err, "keyword request rejected");
            Err(err.into())
        }
    }
}
