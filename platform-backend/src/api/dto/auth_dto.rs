// src/api/dto/auth_dto.rs

use crate::domain::dashboard::Dashboard;
use crate::domain::user_model::SafeUser;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

// --- リクエストDTO ---

/// ログインリクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// ユーザー登録リクエスト
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(
        min = 1,
        max = 50,
        message = "Username must be between 1 and 50 characters"
    ))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,

    /// 指定された場合はパスワードと一致している必要がある
    pub confirm_password: Option<String>,

    pub role: String,
}

impl RegisterRequest {
    pub fn passwords_match(&self) -> bool {
        match &self.confirm_password {
            Some(confirm) => *confirm == self.password,
            None => true,
        }
    }
}

// --- レスポンスDTO ---

/// 現在のセッション情報
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SessionResponse {
    pub username: String,
    pub role: String,
    pub dashboards: Vec<Dashboard>,
}

/// ログイン成功時のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: Uuid,
    pub session: SessionResponse,
}

/// 登録成功時のレスポンス
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: SafeUser,
}
