// tests/integration/data_api_tests.rs
use axum::http::StatusCode;
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::request::{body_json, body_text, csv_request, empty_request, json_request, login, send};

#[tokio::test]
async fn test_dataset_quality_update() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "data", "data123").await;

    let payload = json!({
        "name": "web_sessions",
        "source_department": "Marketing",
        "size_mb": 512.0,
        "row_count": 120000,
        "column_count": 14,
        "sensitivity": "High"
    });
    let response = send(&app, json_request("POST", "/data/datasets", Some(&token), &payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let uri = format!("/data/datasets/{}/quality", id);
    let response = send(&app, json_request("PATCH", &uri, Some(&token), &json!({ "quality_score": 8.2 }))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["quality_score"], 8.2);
    assert!(body["data"]["last_accessed"].is_string());

    let response = send(&app, json_request("PATCH", &uri, Some(&token), &json!({ "quality_score": 10.5 }))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        json_request("PATCH", "/data/datasets/999/quality", Some(&token), &json!({ "quality_score": 5.0 })),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_dataset_import_filter_export() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "data", "data123").await;

    let csv = "name,source_department,size_mb,row_count,column_count,quality_score\n\
               ledger,Finance,20,500,10,9.5\n\
               leads,Sales,5,100,6,4.0\n\
               scratch,Sales,1,10,2,\n";
    let response = send(&app, csv_request("/data/datasets/import", &token, csv)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, empty_request("GET", "/data/datasets?min_quality=5", Some(&token))).await;
    let body = body_json(response).await;
    let names: Vec<&str> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["ledger"]);

    let response = send(&app, empty_request("GET", "/data/datasets?department=sales", Some(&token))).await;
    assert_eq!(body_json(response).await["data"].as_array().unwrap().len(), 2);

    let response = send(&app, empty_request("GET", "/data/datasets/export", Some(&token))).await;
    assert_eq!(body_text(response).await.lines().count(), 4);
}

#[tokio::test]
async fn test_dataset_numeric_import_error() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "admin", "admin123").await;

    let csv = "name,source_department,size_mb,row_count,column_count\nbad,Sales,huge,1,1\n";
    let response = send(&app, csv_request("/data/datasets/import", &token, csv)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(
        body_json(response).await["errors"][0],
        "Row 2: Invalid numeric values for size_mb, row_count, or column_count"
    );
}
