// platform-backend/src/api/handlers/mod.rs
pub mod assistant_handler;
pub mod auth_handler;
pub mod data_handler;
pub mod executive_handler;
pub mod it_ops_handler;
pub mod security_handler;

use crate::api::AppState;
use crate::logging::{inject_request_context, logging_middleware};
use crate::middleware::auth::cors_layer;
use axum::{
    http::{header, StatusCode},
    middleware::from_fn,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::trace::TraceLayer;

/// CSVのダウンロードレスポンス
pub fn csv_response(file_name: &str, body: String) -> Response {
    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        body,
    )
        .into_response()
}

async fn health_handler() -> &'static str {
    "OK"
}

/// すべてのルートを束ねたルーター
pub fn app_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .merge(auth_handler::auth_router())
        .merge(executive_handler::executive_router(&app_state))
        .merge(security_handler::security_router(&app_state))
        .merge(data_handler::data_router(&app_state))
        .merge(it_ops_handler::it_ops_router(&app_state))
        .merge(assistant_handler::assistant_router(&app_state))
        .layer(from_fn(logging_middleware))
        .layer(from_fn(inject_request_context))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer())
        .with_state(app_state)
}
