//! Integration tests for the health check, API greeting and general HTTP
//! behaviour.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, send};

#[tokio::test]
async fn health_check_returns_ok_with_json() {
    let app = common::build_test_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["version"].is_string());
    assert_eq!(json["store_healthy"], true);
}

#[tokio::test]
async fn health_check_reports_degraded_store() {
    let app = common::build_degraded_app();
    let response = get(&app, "/health").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["store_healthy"], false);
}

#[tokio::test]
async fn api_root_returns_greeting() {
    let app = common::build_test_app();
    for uri in ["/api/", "/api"] {
        let response = get(&app, uri).await;
        assert_eq!(response.status(), StatusCode::OK, "{uri}");
        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({"message": "Mushroom Finder API"}));
    }
}

#[tokio::test]
async fn unknown_route_returns_404() {
    let app = common::build_test_app();
    let response = get(&app, "/this-route-does-not-exist").await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn response_contains_x_request_id_header() {
    let app = common::build_test_app();
    let response = get(&app, "/health").await;

    let request_id = response
        .headers()
        .get("x-request-id")
        .expect("x-request-id header should be present");
    assert!(!request_id.to_str().unwrap().is_empty());
}

#[tokio::test]
async fn caller_supplied_request_id_is_propagated() {
    let app = common::build_test_app();
    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "smoke-123")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.headers()["x-request-id"], "smoke-123");
}

#[tokio::test]
async fn cors_allows_any_origin_by_default() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/mushroom-spots")
        .header("origin", "http://example.com")
        .header("access-control-request-method", "POST")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["access-control-allow-origin"], "*");
}

#[tokio::test]
async fn cors_restricted_origins_reject_strangers() {
    let mut config = common::test_config();
    config.cors_origins = vec!["http://localhost:8081".to_string()];
    let app = common::build_test_app_with(config);

    let request = Request::builder()
        .uri("/api/")
        .header("origin", "http://evil.example")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert!(response.headers().get("access-control-allow-origin").is_none());

    let request = Request::builder()
        .uri("/api/")
        .header("origin", "http://localhost:8081")
        .body(Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(
        response.headers()["access-control-allow-origin"],
        "http://localhost:8081"
    );
}
