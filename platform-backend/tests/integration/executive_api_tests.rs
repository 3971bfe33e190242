// tests/integration/executive_api_tests.rs
use axum::http::{header, StatusCode};

use crate::common::app_helper::setup_app;
use crate::common::request::{body_json, body_text, csv_request, empty_request, login, send};

#[tokio::test]
async fn test_statistics_and_kpis() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "admin", "admin123").await;

    let response = send(&app, empty_request("GET", "/executive/statistics", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["user_count"], 4);
    assert_eq!(body["data"]["total_incidents"], 0);
    assert_eq!(body["data"]["avg_quality"], 0.0);

    let csv = "title,threat_type,severity,status\nWorm,Malware,Critical,Resolved\n";
    send(&app, csv_request("/security/incidents/import", &token, csv)).await;

    let response = send(&app, empty_request("GET", "/executive/kpis", Some(&token))).await;
    let body = body_json(response).await;
    // 85 + 10 * 1.0 - 5 * 1
    assert_eq!(body["data"]["security_posture"], 90);
    assert_eq!(body["data"]["system_health"], 92);
    assert_eq!(body["data"]["data_quality"], 0.87);
}

#[tokio::test]
async fn test_summary_export() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "cyber", "cyber123").await;

    let response = send(&app, empty_request("GET", "/executive/export/summary", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_DISPOSITION]
        .to_str()
        .unwrap()
        .contains("executive_summary.csv"));
    let text = body_text(response).await;
    assert!(text.starts_with("Category,Count,Export_Date\nCyber Incidents,0,"));

    let response = send(&app, empty_request("GET", "/executive/export/users", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
