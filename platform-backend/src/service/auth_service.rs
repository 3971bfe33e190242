// src/service/auth_service.rs
use crate::domain::dashboard::Dashboard;
use crate::domain::permission;
use crate::domain::role_model::RoleName;
use crate::domain::user_model::SafeUser;
use crate::error::{AppError, AppResult};
use crate::repository::user_repository::UserRepository;
use crate::utils::password::PasswordManager;
use std::sync::Arc;
use tracing::{info, warn};

/// ユーザー登録の結果
///
/// 既存ユーザー名は想定内の結果であり、エラーとしては扱わない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegisterOutcome {
    Created(SafeUser),
    AlreadyExists,
}

/// 認証サービス
pub struct AuthService {
    user_repo: Arc<UserRepository>,
    password_manager: Arc<PasswordManager>,
}

impl AuthService {
    pub fn new(user_repo: Arc<UserRepository>, password_manager: Arc<PasswordManager>) -> Self {
        Self {
            user_repo,
            password_manager,
        }
    }

    // --- ユーザー登録・ログイン ---

    /// ログイン
    ///
    /// 認証に成功した場合のみユーザー情報を返す。ユーザー名とパスワードの
    /// どちらが誤っていたかは呼び出し側に区別させない。
    pub async fn login(&self, username: &str, password: &str) -> AppResult<Option<SafeUser>> {
        let user = self.user_repo.find_by_username(username).await?;

        // 未登録ユーザーでも同じコストの照合を行う
        let manager = Arc::clone(&self.password_manager);
        let password = password.to_string();
        let hash = match &user {
            Some(user) => user.password_hash.clone(),
            None => self.password_manager.dummy_hash().to_string(),
        };
        let verified = tokio::task::spawn_blocking(move || manager.verify_password(&password, &hash))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Password verification task failed: {}", e)))?;

        let user = match user {
            Some(user) if verified => user,
            Some(_) => {
                warn!(username = %username, "Login failed: password mismatch");
                return Ok(None);
            }
            None => {
                warn!(username = %username, "Login failed: unknown user");
                return Ok(None);
            }
        };

        info!(username = %user.username, role = %user.role, "User logged in");
        Ok(Some(user.into()))
    }

    /// ユーザー登録
    ///
    /// 不明なロールは `ValidationError`。同名ユーザーが存在する場合は上書きしない。
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        role: &str,
    ) -> AppResult<RegisterOutcome> {
        let username = username.trim();
        if username.is_empty() || password.is_empty() {
            return Err(AppError::ValidationError(
                "Username and password are required".to_string(),
            ));
        }

        let role: RoleName = role.parse().map_err(AppError::ValidationError)?;

        if self.user_repo.find_by_username(username).await?.is_some() {
            warn!(username = %username, "Registration rejected: username already exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let manager = Arc::clone(&self.password_manager);
        let plain = password.to_string();
        let password_hash = tokio::task::spawn_blocking(move || manager.hash_password(&plain))
            .await
            .map_err(|e| AppError::InternalServerError(format!("Password hashing task failed: {}", e)))??;

        if !self.user_repo.create(username, &password_hash, role).await? {
            warn!(username = %username, "Registration rejected: username already exists");
            return Ok(RegisterOutcome::AlreadyExists);
        }

        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .ok_or_else(|| AppError::InternalServerError("Registered user not found".to_string()))?;

        info!(username = %username, role = %role, "User registered");
        Ok(RegisterOutcome::Created(user.into()))
    }

    // --- 認可 ---

    /// ダッシュボードへのアクセス可否
    ///
    /// 画面遷移の表示制御とは独立に、アクセスのたびに呼び出す。
    pub fn authorize(role: &str, dashboard: Dashboard) -> bool {
        permission::allowed_dashboards(role).contains(&dashboard)
    }

    /// ダッシュボードIDを文字列で受け取る版（不明なIDは拒否）
    pub fn authorize_id(role: &str, dashboard_id: &str) -> bool {
        match Dashboard::from_str(dashboard_id) {
            Some(dashboard) => Self::authorize(role, dashboard),
            None => {
                warn!(role = %role, dashboard = %dashboard_id, "Unknown dashboard requested");
                false
            }
        }
    }
}
