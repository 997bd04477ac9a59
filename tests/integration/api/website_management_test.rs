// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use super::super::helpers::create_test_app;
use axum::http::StatusCode;
use serde_json::{json, Value};
use sitelens::domain::models::website::WebsiteFields;
use sitelens::domain::repositories::website_repository::WebsiteRepository;

#[tokio::test]
async fn test_list_returns_newest_first() {
    let app = create_test_app().await;

    let first = app
        .repo
        .create(&WebsiteFields::new("First", "one"))
        .await
        .unwrap();
    let second = app
        .repo
        .create(&WebsiteFields::new("Second", "two"))
        .await
        .unwrap();

    let response = app.server.get("/api/analyze/").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Successfully retrieved all website records.");
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["id"], second.id);
    assert_eq!(data[1]["id"], first.id);
}

#[tokio::test]
async fn test_list_empty_store() {
    let app = create_test_app().await;

    let response = app.server.get("/api/analyze").await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["data"], json!([]));
}

#[tokio::test]
async fn test_update_overwrites_fields_and_keeps_identity() {
    let app = create_test_app().await;
    let created = app
        .repo
        .create(&WebsiteFields::new("Old", "old description"))
        .await
        .unwrap();

    let response = app
        .server
        .put(&format!("/api/analyze/{}", created.id))
        .json(&json!({ "brand_name": "New", "description": "new description" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["message"], "Website record updated successfully.");
    assert_eq!(body["data"]["id"], created.id);
    assert_eq!(body["data"]["brand_name"], "New");
    assert_eq!(body["data"]["description"], "new description");

    let stored = app.repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.timestamp, created.timestamp);
    assert_eq!(stored.brand_name, "New");
}

#[tokio::test]
async fn test_update_blank_values_become_sentinel() {
    let app = create_test_app().await;
    let created = app
        .repo
        .create(&WebsiteFields::new("Old", "old description"))
        .await
        .unwrap();

    let response = app
        .server
        .put(&format!("/api/analyze/{}", created.id))
        .json(&json!({ "brand_name": "  ", "description": "kept" }))
        .await;

    response.assert_status_ok();
    let body: Value = response.json();
    assert_eq!(body["data"]["brand_name"], "Not found");
    assert_eq!(body["data"]["description"], "kept");
}

#[tokio::test]
async fn test_update_missing_record_is_404() {
    let app = create_test_app().await;

    let response = app
        .server
        .put("/api/analyze/9999")
        .json(&json!({ "brand_name": "New", "description": "new" }))
        .await;

    response.assert_status(StatusCode::NOT_FOUND);
    let body: Value = response.json();
    assert_eq!(body["error"], "Record not found.");
}

#[tokio::test]
async fn test_update_missing_fields_is_400() {
    let app = create_test_app().await;
    let created = app
        .repo
        .create(&WebsiteFields::new("Old", "old"))
        .await
        .unwrap();

    let response = app
        .server
        .put(&format!("/api/analyze/{}", created.id))
        .json(&json!({ "brand_name": "New" }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let stored = app.repo.find_by_id(created.id).await.unwrap().unwrap();
    assert_eq!(stored.brand_name, "Old");
}

#[tokio::test]
async fn test_non_integer_id_is_400() {
    let app = create_test_app().await;

    let response = app.server.delete("/api/analyze/abc").await;

    response.assert_status(StatusCode::BAD_REQUEST);
    let body: Value = response.json();
    assert!(body["error"]
        .as_str()
        .unwrap()
        .starts_with("Invalid record id"));
}

#[tokio::test]
async fn test_delete_returns_prior_row_and_removes_it() {
    let app = create_test_app().await;
    let keep = app
        .repo
        .create(&WebsiteFields::new("Keep", "stays"))
        .await
        .unwrap();
    let gone = app
        .repo
        .create(&WebsiteFields::new("Gone", "leaves"))
        .await
        .unwrap();

    let response = app.server.delete(&format!("/api/analyze/{}", gone.id)).await;
    response.assert_status_ok();

    let body: Value = response.json();
    assert_eq!(body["message"], "Website record deleted successfully.");
    assert_eq!(body["data"]["id"], gone.id);
    assert_eq!(body["data"]["brand_name"], "Gone");

    let listed: Value = app.server.get("/api/analyze/").await.json();
    let ids: Vec<i64> = listed["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|w| w["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![keep.id as i64]);
}

#[tokio::test]
async fn test_delete_twice_is_404() {
    let app = create_test_app().await;
    let created = app
        .repo
        .create(&WebsiteFields::new("Once", "only"))
        .await
        .unwrap();

    app.server
        .delete(&format!("/api/analyze/{}", created.id))
        .await
        .assert_status_ok();

    let response = app
        .server
        .delete(&format!("/api/analyze/{}", created.id))
        .await;
    response.assert_status(StatusCode::NOT_FOUND);
}
