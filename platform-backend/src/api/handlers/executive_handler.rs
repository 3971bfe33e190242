// platform-backend/src/api/handlers/executive_handler.rs
use crate::api::dto::executive_dto::ExportKind;
use crate::api::handlers::csv_response;
use crate::api::AppState;
use crate::domain::dashboard::Dashboard;
use crate::error::{AppError, AppResult};
use crate::require_dashboard;
use crate::types::ApiResponse;
use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};

pub async fn statistics_handler(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let stats = app_state.executive_service.get_statistics().await?;
    Ok(ApiResponse::success(stats))
}

pub async fn kpis_handler(State(app_state): State<AppState>) -> AppResult<impl IntoResponse> {
    let kpis = app_state.executive_service.get_kpis().await?;
    Ok(ApiResponse::success(kpis))
}

/// サマリーまたは各種別の全件をCSVで出力
pub async fn export_handler(
    State(app_state): State<AppState>,
    Path(kind): Path<String>,
) -> AppResult<Response> {
    let kind: ExportKind = kind.parse().map_err(AppError::BadRequest)?;

    let body = match kind {
        ExportKind::Summary => app_state.executive_service.export_summary().await?,
        ExportKind::Incidents => app_state.export_service.export_incidents().await?,
        ExportKind::Datasets => app_state.export_service.export_datasets().await?,
        ExportKind::Tickets => app_state.export_service.export_tickets().await?,
    };

    Ok(csv_response(kind.file_name(), body))
}

pub fn executive_router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route("/executive/statistics", get(statistics_handler))
        .route("/executive/kpis", get(kpis_handler))
        .route("/executive/export/{kind}", get(export_handler))
        .route_layer(require_dashboard!(
            app_state.sessions.clone(),
            Dashboard::Executive
        ))
}
