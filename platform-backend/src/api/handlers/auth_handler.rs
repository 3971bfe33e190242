// platform-backend/src/api/handlers/auth_handler.rs
use crate::api::dto::auth_dto::*;
use crate::api::AppState;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::CurrentSession;
use crate::service::auth_service::RegisterOutcome;
use crate::service::session_service::Session;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Router,
};
use tracing::info;
use validator::Validate;

fn session_response(session: &Session) -> SessionResponse {
    SessionResponse {
        username: session.username.clone(),
        role: session.role.clone(),
        dashboards: session.dashboards(),
    }
}

/// ログイン
pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    let user = app_state
        .auth_service
        .login(&payload.username, &payload.password)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Invalid username or password".to_string()))?;

    let session = app_state.sessions.create(&user).await;

    Ok(ApiResponse::success_with_message(
        "Login successful",
        LoginResponse {
            token: session.token,
            session: session_response(&session),
        },
    ))
}

/// ユーザー登録
pub async fn register_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;

    if !payload.passwords_match() {
        return Err(AppError::ValidationError("Passwords do not match".to_string()));
    }

    match app_state
        .auth_service
        .register(&payload.username, &payload.password, &payload.role)
        .await?
    {
        RegisterOutcome::Created(user) => Ok((
            StatusCode::CREATED,
            ApiResponse::success_with_message(
                "User registered successfully",
                RegisterResponse { user },
            ),
        )),
        RegisterOutcome::AlreadyExists => {
            Err(AppError::Conflict("Username already exists".to_string()))
        }
    }
}

/// ログアウト
pub async fn logout_handler(
    State(app_state): State<AppState>,
    CurrentSession(session): CurrentSession,
) -> AppResult<impl IntoResponse> {
    app_state.sessions.remove(&session.token).await;
    info!(username = %session.username, "User logged out");
    Ok(ApiResponse::success_with_message("Logged out", ()))
}

/// 現在のセッションと表示可能なダッシュボード
pub async fn me_handler(CurrentSession(session): CurrentSession) -> AppResult<impl IntoResponse> {
    Ok(ApiResponse::success(session_response(&session)))
}

pub fn auth_router() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(login_handler))
        .route("/auth/register", post(register_handler))
        .route("/auth/logout", post(logout_handler))
        .route("/auth/me", get(me_handler))
}
