#![allow(dead_code)]

use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mycofind_api::config::{ServerConfig, StoreBackend, DEFAULT_MAX_BODY_BYTES};
use mycofind_api::router::build_app_router;
use mycofind_api::state::AppState;
use mycofind_core::store::{InMemoryStore, StoreError, StoreHealth, StoreResult};
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_secs: 30,
        store_backend: StoreBackend::Memory,
        db_max_connections: 1,
        max_body_bytes: DEFAULT_MAX_BODY_BYTES,
    }
}

/// Build the full application router over a fresh in-memory store.
///
/// Uses [`build_app_router`] so tests exercise the same middleware stack
/// (CORS, request ID, timeout, tracing, panic recovery) that production uses.
/// Clones of the returned router share the same store.
pub fn build_test_app() -> Router {
    build_test_app_with(test_config())
}

pub fn build_test_app_with(config: ServerConfig) -> Router {
    let state = AppState::from_store(Arc::new(InMemoryStore::new()), config.clone());
    build_app_router(state, &config)
}

/// Health probe that always fails, for the degraded `/health` path.
pub struct DownStore;

#[async_trait]
impl StoreHealth for DownStore {
    async fn ping(&self) -> StoreResult<()> {
        Err(StoreError::backend("connection refused"))
    }
}

pub async fn send(app: &Router, request: Request<Body>) -> Response<Body> {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: &Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send_json(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn send_json(app: &Router, method: Method, uri: &str, body: String) -> Response<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Router whose `/health` probe always reports the store as down.
pub fn build_degraded_app() -> Router {
    let config = test_config();
    let mut state = AppState::from_store(Arc::new(InMemoryStore::new()), config.clone());
    state.store_health = Arc::new(DownStore);
    build_app_router(state, &config)
}
