// platform-backend/src/middleware/authorization.rs

use crate::domain::dashboard::Dashboard;
use crate::error::AppError;
use crate::log_with_context;
use crate::middleware::auth::{authenticate, CurrentSession};
use crate::service::auth_service::AuthService;
use crate::service::session_service::SessionRegistry;
use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// ダッシュボード単位のアクセスガード
#[derive(Clone)]
pub struct RequireDashboard {
    pub sessions: Arc<SessionRegistry>,
    pub dashboard: Dashboard,
}

impl RequireDashboard {
    pub fn new(sessions: Arc<SessionRegistry>, dashboard: Dashboard) -> Self {
        Self {
            sessions,
            dashboard,
        }
    }
}

/// ダッシュボードガードのミドルウェアを作るマクロ
#[macro_export]
macro_rules! require_dashboard {
    ($sessions:expr, $dashboard:expr) => {{
        use axum::middleware::from_fn_with_state;
        use $crate::middleware::authorization::{check_dashboard_access, RequireDashboard};

        from_fn_with_state(
            RequireDashboard::new($sessions, $dashboard),
            check_dashboard_access,
        )
    }};
}

/// 認証（401）と認可（403）をアクセスのたびに行う
pub async fn check_dashboard_access(
    State(guard): State<RequireDashboard>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let session = authenticate(&guard.sessions, req.headers()).await?;

    if !AuthService::authorize(&session.role, guard.dashboard) {
        log_with_context!(
            tracing::Level::WARN,
            "Dashboard access denied",
            "username" => &session.username,
            "role" => &session.role,
            "dashboard" => guard.dashboard.as_str(),
        );
        return Err(AppError::Forbidden(format!(
            "Access to the {} dashboard is not permitted",
            guard.dashboard.title()
        )));
    }

    req.extensions_mut().insert(CurrentSession(session));
    Ok(next.run(req).await)
}
