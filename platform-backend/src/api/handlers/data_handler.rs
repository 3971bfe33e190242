// platform-backend/src/api/handlers/data_handler.rs
use crate::api::dto::dataset_dto::{CreateDatasetDto, DatasetFilterQuery, UpdateQualityDto};
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
use validator::Validate;

pub async fn list_datasets_handler(
    State(app_state): State<AppState>,
    Query(query): Query<DatasetFilterQuery>,
) -> AppResult<impl IntoResponse> {
    let datasets = app_state.dataset_service.search_datasets(&query).await?;
    Ok(ApiResponse::success(datasets))
}

pub async fn create_dataset_handler(
    State(app_state): State<AppState>,
    Json(payload): Json<CreateDatasetDto>,
) -> AppResult<impl IntoResponse> {
    let id = app_state.dataset_service.create_dataset(payload).await?;
    Ok((
        StatusCode::CREATED,
        ApiResponse::success_with_message("Dataset created", CreatedResponse { id }),
    ))
}

pub async fn get_dataset_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    let dataset = app_state.dataset_service.get_dataset(id).await?;
    Ok(ApiResponse::success(dataset))
}

/// 品質スコアの更新（最終アクセス日時も更新される）
pub async fn update_quality_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<UpdateQualityDto>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    let dataset = app_state
        .dataset_service
        .update_quality(id, payload.quality_score)
        .await?;
    Ok(ApiResponse::success_with_message("Quality score updated", dataset))
}

pub async fn delete_dataset_handler(
    State(app_state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<impl IntoResponse> {
    app_state.dataset_service.delete_dataset(id).await?;
    Ok(ApiResponse::success(OperationResult::new(id, "Dataset deleted")))
}

pub async fn import_datasets_handler(
    State(app_state): State<AppState>,
    body: String,
) -> AppResult<impl IntoResponse> {
    let imported = app_state.import_service.import_datasets(&body).await?;
    Ok(ApiResponse::success_with_message(
        format!("Imported {} datasets", imported),
        ImportResponse { imported },
    ))
}

pub async fn export_datasets_handler(State(app_state): State<AppState>) -> AppResult<Response> {
    let body = app_state.export_service.export_datasets().await?;
    Ok(csv_response("datasets_metadata.csv", body))
}

pub fn data_router(app_state: &AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/data/datasets",
            get(list_datasets_handler).post(create_dataset_handler),
        )
        .route("/data/datasets/import", post(import_datasets_handler))
        .route("/data/datasets/export", get(export_datasets_handler))
        .route(
            "/data/datasets/{id}",
            get(get_dataset_handler).delete(delete_dataset_handler),
        )
        .route("/data/datasets/{id}/quality", patch(update_quality_handler))
        .route_layer(require_dashboard!(app_state.sessions.clone(), Dashboard::Data))
}
