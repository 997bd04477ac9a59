// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::{create_test_app, create_test_app_with, disabled_llm};
use axum::http::StatusCode;
use serde_json::{json, Value};
use sitelens::domain::repositories::website_repository::WebsiteRepository;
use std::time::Duration;

#[tokio::test]
async fn test_analyze_stores_extracted_fields() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": format!("{}/acme", app.site_url) }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["message"], "Website analysis successful and data stored.");
    assert_eq!(body["data"]["brand_name"], "Acme Rockets");
    assert_eq!(
        body["data"]["description"],
        "Acme builds reusable rockets for small payloads."
    );
    assert!(body["data"]["id"].as_i64().is_some());
    assert!(body["data"]["timestamp"].as_str().is_some());

    let stored = app.repo.list_newest_first().await.unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].brand_name, "Acme Rockets");
}

#[tokio::test]
async fn test_route_without_trailing_slash_is_accepted() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze")
        .json(&json!({ "url": format!("{}/acme", app.site_url) }))
        .await;

    response.assert_status(StatusCode::CREATED);
}

#[tokio::test]
async fn test_page_without_content_stores_sentinels() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": format!("{}/bare", app.site_url) }))
        .await;

    response.assert_status(StatusCode::CREATED);
    let body: Value = response.json();
    assert_eq!(body["data"]["brand_name"], "Not found");
    assert_eq!(body["data"]["description"], "Not found");
}

#[tokio::test]
async fn test_invalid_url_is_rejected_without_storing() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": "not a url" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "Invalid URL format.");
    assert!(app.repo.list_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_missing_url_is_rejected() {
    let app = create_test_app().await;

    let response = app.server.post("/api/analyze/").json(&json!({})).await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "URL is required.");
}

#[tokio::test]
async fn test_empty_url_is_rejected() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": "" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert_eq!(body["error"], "URL is required.");
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let app = create_test_app().await;

    let response = app.server.post("/api/analyze/").text("{ url").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.repo.list_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_slow_site_times_out_without_storing() {
    let app = create_test_app_with(disabled_llm(), Duration::from_millis(200)).await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": format!("{}/slow", app.site_url) }))
        .await;

    response.assert_status(StatusCode::GATEWAY_TIMEOUT);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Website analysis timed out. The server did not respond in time."
    );
    assert!(app.repo.list_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_upstream_error_is_internal() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": format!("{}/broken", app.site_url) }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    let body: Value = response.json();
    assert_eq!(
        body["error"],
        "Failed to analyze website due to an internal server error."
    );
    assert!(app.repo.list_newest_first().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_unreachable_host_is_internal() {
    let app = create_test_app().await;

    let response = app
        .server
        .post("/api/analyze/")
        .json(&json!({ "url": "http://127.0.0.1:1/nothing" }))
        .await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert!(app.repo.list_newest_first().await.unwrap().is_empty());
}
