//! Error body shape and request-rejection mapping across endpoints.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, get, post_json, send, send_json};
use serde_json::json;

#[tokio::test]
async fn malformed_json_returns_400_with_error_body() {
    let app = common::build_test_app();
    let response = send_json(
        &app,
        Method::POST,
        "/api/mushroom-spots",
        "{not json".to_string(),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn missing_content_type_returns_400() {
    let app = common::build_test_app();
    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/mushrooms")
        .body(Body::from("{}"))
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn invalid_patch_body_returns_400() {
    let app = common::build_test_app();
    let created = body_json(
        post_json(
            &app,
            "/api/mushroom-spots",
            json!({"latitude": 1.0, "longitude": 1.0, "mushroom_type": "Cèpe"}),
        )
        .await,
    )
    .await;
    let uri = format!("/api/mushroom-spots/{}", created["id"].as_str().unwrap());

    let response = send_json(&app, Method::PUT, &uri, json!({"notes": 5}).to_string()).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "VALIDATION_ERROR");

    let response = send_json(
        &app,
        Method::PUT,
        &uri,
        json!({"mushroom_type": ""}).to_string(),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn not_found_body_has_code() {
    let app = common::build_test_app();
    let response = get(&app, "/api/mushrooms/missing").await;
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
}

#[tokio::test]
async fn status_checks_round_trip() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/status", json!({"client_name": "deploy-bot"})).await;
    assert_eq!(response.status(), StatusCode::OK);
    let check = body_json(response).await;
    assert_eq!(check["client_name"], "deploy-bot");
    assert!(check["id"].is_string());

    let list = body_json(get(&app, "/api/status").await).await;
    assert_eq!(list, json!([check]));

    let response = post_json(&app, "/api/status", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
