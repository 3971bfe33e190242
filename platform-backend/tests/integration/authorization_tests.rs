// tests/integration/authorization_tests.rs
use axum::http::StatusCode;

use crate::common::app_helper::setup_app;
use crate::common::request::{empty_request, login, send};

#[tokio::test]
async fn test_dashboards_require_session() {
    let (app, _state, _db) = setup_app().await;

    for uri in [
        "/executive/statistics",
        "/security/incidents",
        "/data/datasets",
        "/it-ops/tickets",
        "/assistant/summary",
    ] {
        let response = send(&app, empty_request("GET", uri, None)).await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED, "{}", uri);
    }

    let forged = uuid::Uuid::new_v4().to_string();
    let response = send(&app, empty_request("GET", "/security/incidents", Some(&forged))).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_role_matrix() {
    let (app, _state, _db) = setup_app().await;

    let cases = [
        ("admin", "admin123", [true, true, true, true, true]),
        ("cyber", "cyber123", [true, true, false, false, true]),
        ("data", "data123", [true, false, true, false, true]),
        ("it", "it123", [true, false, false, true, true]),
    ];
    let uris = [
        "/executive/statistics",
        "/security/incidents",
        "/data/datasets",
        "/it-ops/tickets",
        "/assistant/summary",
    ];

    for (username, password, expected) in cases {
        let token = login(&app, username, password).await;
        for (uri, allowed) in uris.iter().zip(expected) {
            let response = send(&app, empty_request("GET", uri, Some(&token))).await;
            let wanted = if allowed {
                StatusCode::OK
            } else {
                StatusCode::FORBIDDEN
            };
            assert_eq!(response.status(), wanted, "{} -> {}", username, uri);
        }
    }
}

#[tokio::test]
async fn test_custom_session_header() {
    let (app, _state, _db) = setup_app().await;
    let token = login(&app, "it", "it123").await;

    let request = axum::http::Request::builder()
        .uri("/it-ops/tickets")
        .header("x-session-token", &token)
        .body(axum::body::Body::empty())
        .unwrap();
    let response = send(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
}
