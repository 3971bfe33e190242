// platform-backend/src/middleware/auth.rs

use crate::api::HasSessionRegistry;
use crate::error::AppError;
use crate::service::session_service::{Session, SessionRegistry};
use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts, HeaderMap, HeaderValue, Method},
};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tracing::warn;
use uuid::Uuid;

/// Authorization ヘッダーを使えないクライアント向けのヘッダー名
pub const SESSION_TOKEN_HEADER: &str = "x-session-token";

/// リクエストからセッショントークンを取り出す
///
/// `Authorization: Bearer <token>` を優先し、なければ `x-session-token` を見る。
pub fn extract_session_token(headers: &HeaderMap) -> Option<Uuid> {
    let bearer = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "));

    let raw = bearer.or_else(|| {
        headers
            .get(SESSION_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
    })?;

    Uuid::parse_str(raw.trim()).ok()
}

/// トークンに対応するセッションを取得（なければ 401）
pub async fn authenticate(
    registry: &SessionRegistry,
    headers: &HeaderMap,
) -> Result<Session, AppError> {
    let token = extract_session_token(headers).ok_or_else(|| {
        warn!("Request without session token");
        AppError::Unauthorized("Authentication required".to_string())
    })?;

    registry.get(&token).await.ok_or_else(|| {
        warn!("Request with unknown session token");
        AppError::Unauthorized("Invalid or expired session".to_string())
    })
}

/// ログイン中のセッション
///
/// ダッシュボードガードを通過したリクエストではガードが設定した値を使い、
/// それ以外ではレジストリを直接引く。
#[derive(Debug, Clone)]
pub struct CurrentSession(pub Session);

impl<S> FromRequestParts<S> for CurrentSession
where
    S: HasSessionRegistry + Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        if let Some(session) = parts.extensions.get::<CurrentSession>() {
            return Ok(session.clone());
        }

        let session = authenticate(state.sessions(), &parts.headers).await?;
        Ok(CurrentSession(session))
    }
}

/// CORS設定
///
/// `CORS_ALLOWED_ORIGINS`（カンマ区切り）が未設定なら全オリジンを許可する。
pub fn cors_layer() -> CorsLayer {
    let origins: Vec<HeaderValue> = std::env::var("CORS_ALLOWED_ORIGINS")
        .unwrap_or_default()
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::any()
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::AUTHORIZATION,
            header::CONTENT_TYPE,
            header::ACCEPT,
            header::HeaderName::from_static(SESSION_TOKEN_HEADER),
        ])
        .max_age(std::time::Duration::from_secs(3600))
}
