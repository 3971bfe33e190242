// platform-backend/src/api/handlers/assistant_handler.rs
use crate::api::dto::executive_dto::AskRequest;
use crate::api::AppState;
use crate::domain::dashboard::Dashboard;
use crate::error::AppResult;
use crate::middleware::auth::CurrentSession;
use crate::require_dashboard;
use crate::service::assistant_service::suggested_questions;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use validator::Validate;

/// ロールで閲覧できる種別の要約
pub async fn summary_handler(
    State(app_state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<impl IntoResponse> {
    let summary = app_state.assistant_service.summary(&session.role).await;
    Ok(ApiResponse::success(summary))
}

pub async fn questions_handler(
    CurrentSession(session): CurrentSession,
) -> AppResult<impl IntoResponse> {
    Ok(ApiResponse::success(suggested_questions(&session.role)))
}

pub async fn ask_handler(
    State(app_state): State<AppState>,
    CurrentSession(session): CurrentSession,
    Json(payload): Json<AskRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let answer = app_state
        .assistant_service
        .ask(&session.role, &payload.question)
        .await;
    Ok(ApiResponse::success(answer))
}

pub fn assistant_router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/assistant/summary", get(summary_handler))
        .route("/assistant/questions", get(questions_handler))
        .route("/assistant/ask", post(ask_handler))
        .route_layer(require_dashboard!(
            app_state.sessions.clone(),
            Dashboard::Assistant
        ))
}
