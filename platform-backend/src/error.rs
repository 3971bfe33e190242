// src/error.rs

use crate::utils::password::PasswordError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;
use validator::ValidationErrors;

/// APIが返すエラーの分類
///
/// 想定内の結果（存在しない、重複）と、ストレージ障害を区別する。
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DbErr(#[from] DbErr),

    #[error("Password error: {0}")]
    Password(#[from] PasswordError),

    #[error("Item not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Multiple validation errors")]
    ValidationErrors(Vec<String>),

    #[error("Validation failed")]
    ValidationFailure(#[from] ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Internal server error: {0}")]
    InternalServerError(String),
}

/// 統一的なエラーレスポンス構造
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_errors: Option<HashMap<String, Vec<String>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
    pub error_type: String,
}

impl ErrorResponse {
    fn new(message: impl Into<String>, error_type: &str) -> Self {
        let message = message.into();
        Self {
            success: false,
            error: message.clone(),
            message,
            validation_errors: None,
            errors: None,
            error_type: error_type.to_string(),
        }
    }
}

const OPERATION_FAILED: &str = "Operation failed. Please try again.";

// axum でエラーをHTTPレスポンスに変換するための実装
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match self {
            AppError::DbErr(db_err) => {
                // 詳細はサーバーログのみ。部分的な更新が残っていると仮定させない
                tracing::error!(error = %db_err, "Storage fault");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(OPERATION_FAILED, "storage_error"),
                )
            }
            AppError::Password(err) => {
                tracing::error!(error = %err, "Password hashing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(OPERATION_FAILED, "internal_server_error"),
                )
            }
            AppError::NotFound(message) => (
                StatusCode::NOT_FOUND,
                ErrorResponse::new(message, "not_found"),
            ),
            AppError::ValidationError(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "validation_error"),
            ),
            AppError::ValidationErrors(errors) => {
                let mut response = ErrorResponse::new("Validation failed", "validation_errors");
                response.errors = Some(errors);
                (StatusCode::BAD_REQUEST, response)
            }
            AppError::ValidationFailure(validation_errors) => {
                let mut field_errors = HashMap::new();
                for (field, errors) in validation_errors.field_errors() {
                    let messages = errors
                        .iter()
                        .map(|e| {
                            e.message
                                .as_ref()
                                .map(|m| m.to_string())
                                .unwrap_or_else(|| format!("Invalid value for {}", field))
                        })
                        .collect::<Vec<_>>();
                    field_errors.insert(field.to_string(), messages);
                }
                let mut response = ErrorResponse::new("Validation failed", "validation_errors");
                response.validation_errors = Some(field_errors);
                (StatusCode::BAD_REQUEST, response)
            }
            AppError::BadRequest(message) => (
                StatusCode::BAD_REQUEST,
                ErrorResponse::new(message, "bad_request"),
            ),
            AppError::Unauthorized(message) => (
                StatusCode::UNAUTHORIZED,
                ErrorResponse::new(message, "unauthorized"),
            ),
            AppError::Forbidden(message) => (
                StatusCode::FORBIDDEN,
                ErrorResponse::new(message, "forbidden"),
            ),
            AppError::Conflict(message) => (
                StatusCode::CONFLICT,
                ErrorResponse::new(message, "conflict"),
            ),
            AppError::InternalServerError(message) => {
                tracing::error!(error = %message, "Internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new("An internal server error occurred", "internal_server_error"),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

// Result 型のエイリアス
pub type AppResult<T> = Result<T, AppError>;
