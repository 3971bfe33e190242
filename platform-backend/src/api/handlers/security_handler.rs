// platform-backend/src/api/handlers/security_handler.rs
use crate::api::dto::incident_dto::{CreateIncidentDto, IncidentFilterQuery, UpdateIncidentStatusDto};
use crate::api::dto::{CreatedResponse, ImportResponse, OperationResult};
use crate::api::handlers::csv_response;
use crate::api::AppState;
use crate::domain::dashboard::Dashboard;
use crate::error::AppResult;
use crate::require_dashboard;
use crate::types::ApiResponse;
use axum::{
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, patch, post},
    Router,
};

/// インシデント一覧（検索条件は任意）
pub async fn list_incidents_handler(
    State(app_state): State<AppState>,
    Query(query): Query<IncidentFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let incidents = app_state.incident_service.search_incidents(&query).await?;
    Ok(ApiResponse::success(incidents))
}

pub async fn create_incident_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateIncidentDto>,
) -> AppResult<impl IntoResponse> {
    let id = app_state.incident_service.create_incident(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Incident created", CreatedResponse { id }),
    ))
}

pub async fn get_incident_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let incident = app_state.incident_service.get_incident(id).await?;
    Ok(ApiResponse::success(incident))
}

pub async fn update_incident_status_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateIncidentStatusDto>,
) -> AppResult<impl IntoResponse> {
    let incident = app_state
        .incident_service
        .update_status(id, &payload.status)
        .await?;
    Ok(ApiResponse::success_with_message("Incident status updated", incident))
}

pub async fn delete_incident_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    app_state.incident_service.delete_incident(id).await?;
    Ok(ApiResponse::success(OperationResult::new(id, "Incident deleted")))
}

/// CSV取り込み（本文はCSVテキスト）
pub async fn import_incidents_handler(
    State(app_state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let imported = app_state.import_service.import_incidents(&body).await?;
    Ok(ApiResponse::success_with_message(
        format!("Imported {} incidents", imported),
        ImportResponse { imported },
    ))
}

pub async fn export_incidents_handler(State(app_state): State<AppState>) -> AppResult<Response> {
    let body = app_state.export_service.export_incidents().await?;
    Ok(csv_response("cyber_incidents.csv", body))
}

pub fn security_router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/security/incidents",
            get(list_incidents_handler).post(create_incident_handler),
        )
        .route("/security/incidents/import", post(import_incidents_handler))
        .route("/security/incidents/export", get(export_incidents_handler))
        .route(
            "/security/incidents/{id}",
            get(get_incident_handler).delete(delete_incident_handler),
        )
        .route(
            "/security/incidents/{id}/status",
            patch(update_incident_status_handler),
        )
        .route_layer(require_dashboard!(
            app_state.sessions.clone(),
            Dashboard::Security
        ))
}
