// platform-backend/src/api/handlers/it_ops_handler.rs
use crate::api::dto::ticket_dto::{CreateTicketDto, TicketFilterQuery, UpdateTicketStatusDto};
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

pub async fn list_tickets_handler(
    State(app_state): State<AppState>,
    Query(query): Query<TicketFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let tickets = app_state.ticket_service.search_tickets(&query).await?;
    Ok(ApiResponse::success(tickets))
}

pub async fn create_ticket_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateTicketDto>,
) -> AppResult<impl IntoResponse> {
    let id = app_state.ticket_service.create_ticket(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Ticket created", CreatedResponse { id }),
    ))
}

pub async fn get_ticket_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let ticket = app_state.ticket_service.get_ticket(id).await?;
    Ok(ApiResponse::success(ticket))
}

/// ステータスとステージの更新（ステージ滞在時間はここで計算される）
pub async fn update_ticket_status_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateTicketStatusDto>,
) -> AppResult<impl IntoResponse> {
    let ticket = app_state
        .ticket_service
        .update_status(id, &payload.status, &payload.current_stage)
        .await?;
    Ok(ApiResponse::success_with_message("Ticket status updated", ticket))
}

pub async fn delete_ticket_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    app_state.ticket_service.delete_ticket(id).await?;
    Ok(ApiResponse::success(OperationResult::new(id, "Ticket deleted")))
}

pub async fn import_tickets_handler(
    State(app_state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let imported = app_state.import_service.import_tickets(&body).await?;
    Ok(ApiResponse::success_with_message(
        format!("Imported {} tickets", imported),
        ImportResponse { imported },
    ))
}

pub async fn export_tickets_handler(State(app_state): State<AppState>) -> AppResult<Response> {
    let body = app_state.export_service.export_tickets().await?;
    Ok(csv_response("it_tickets.csv", body))
}

pub fn it_ops_router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/it-ops/tickets",
            get(list_tickets_handler).post(create_ticket_handler),
        )
        .route("/it-ops/tickets/import", post(import_tickets_handler))
        .route("/it-ops/tickets/export", get(export_tickets_handler))
        .route(
            "/it-ops/tickets/{id}",
            get(get_ticket_handler).delete(delete_ticket_handler),
        )
        .route(
            "/it-ops/tickets/{id}/status",
            patch(update_ticket_status_handler),
        )
        .route_layer(require_dashboard!(app_state.sessions.clone(), Dashboard::ItOps))
}
