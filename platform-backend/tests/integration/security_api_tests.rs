// tests/integration/security_api_tests.rs
use axum::http::{header, StatusCode};
use serde_json::json;

use crate::common::app_helper::setup_app;
use crate::common::request::{body_json, body_text, csv_request, empty_request, json_request, login, send};

#[tokio::test]
async fn test_incident_lifecycle() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "cyber", "cyber123").await;

    let payload = json!({
        "title": "Credential stuffing",
        "threat_type": "brute_force",
        "severity": "critical",
        "assigned_to": "soc"
    });
    let response = send(&app, json_request("POST", "/security/incidents", Some(&token), &payload)).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = send(&app, empty_request("GET", &format!("/security/incidents/{}", id), Some(&token))).await;
    let body = body_json(response).await;
    assert_eq!(body["data"]["threat_type"], "Brute Force");
    assert_eq!(body["data"]["severity"], "Critical");
    assert_eq!(body["data"]["status"], "Open");

    let response = send(
        &app,
        json_request(
            "PATCH",
            &format!("/security/incidents/{}/status", id),
            Some(&token),
            &json!({ "status": "Resolved" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["data"]["status"], "Resolved");
    assert!(body["data"]["resolution_time_hours"].is_number());

    let response = send(&app, empty_request("DELETE", &format!("/security/incidents/{}", id), Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, empty_request("DELETE", &format!("/security/incidents/{}", id), Some(&token))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["message"], "No such record");
}

#[tokio::test]
async fn test_invalid_enum_is_rejected() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "cyber", "cyber123").await;

    let payload = json!({ "title": "x", "threat_type": "Spam", "severity": "High" });
    let response = send(&app, json_request("POST", "/security/incidents", Some(&token), &payload)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(
        &app,
        json_request(
            "PATCH",
            "/security/incidents/1/status",
            Some(&token),
            &json!({ "status": "Done" }),
        ),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_filtering() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "admin", "admin123").await;

    let csv = "title,threat_type,severity,status\n\
               Invoice scam,Phishing,High,Open\n\
               Worm outbreak,Malware,Critical,Resolved\n\
               Gift card scam,Phishing,Low,Closed\n";
    let response = send(&app, csv_request("/security/incidents/import", &token, csv)).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["imported"], 3);

    let response = send(
        &app,
        empty_request("GET", "/security/incidents?threat_type=phishing&search=SCAM", Some(&token)),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 2);

    let response = send(
        &app,
        empty_request("GET", "/security/incidents?severity=Critical", Some(&token)),
    )
    .await;
    let body = body_json(response).await;
    assert_eq!(body["data"][0]["title"], "Worm outbreak");
}

#[tokio::test]
async fn test_import_errors_and_export() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "cyber", "cyber123").await;

    let csv = "title,threat_type,severity,status\n\
               ok,Malware,High,Open\n\
               ,Malware,High,Open\n";
    let response = send(&app, csv_request("/security/incidents/import", &token, csv)).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["errors"][0], "Row 3: Missing required field: title");

    let response = send(&app, empty_request("GET", "/security/incidents/export", Some(&token))).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers()[header::CONTENT_TYPE]
        .to_str()
        .unwrap()
        .starts_with("text/csv"));
    let text = body_text(response).await;
    // 取り込みは全件ロールバックされているのでヘッダーのみ
    assert_eq!(text.lines().count(), 1);
    assert!(text.starts_with("id,title,description,threat_type"));
}
