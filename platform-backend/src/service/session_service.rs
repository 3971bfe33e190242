// src/service/session_service.rs

use crate::domain::dashboard::Dashboard;
use crate::domain::permission;
use crate::domain::user_model::SafeUser;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

/// ログイン済みセッション
///
/// ロールはログイン時点の値を保持する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub token: Uuid,
    pub username: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl Session {
    /// このセッションで表示できるダッシュボード
    pub fn dashboards(&self) -> Vec<Dashboard> {
        permission::allowed_dashboards(&self.role)
            .into_iter()
            .collect()
    }
}

/// セッションの保持（プロセス内、有効期限なし）
///
/// `Anonymous -> Authenticated(role)` はログイン、逆はログアウトのみで遷移する。
#[derive(Debug, Default)]
pub struct SessionRegistry {
    sessions: RwLock<HashMap<Uuid, Session>>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 認証済みユーザーのセッションを作成
    pub async fn create(&self, user: &SafeUser) -> Session {
        let session = Session {
            token: Uuid::new_v4(),
            username: user.username.clone(),
            role: user.role.clone(),
            created_at: Utc::now(),
        };

        self.sessions
            .write()
            .await
            .insert(session.token, session.clone());

        info!(username = %session.username, "Session started");
        session
    }

    pub async fn get(&self, token: &Uuid) -> Option<Session> {
        self.sessions.read().await.get(token).cloned()
    }

    /// セッションを破棄（存在しなければ false）
    pub async fn remove(&self, token: &Uuid) -> bool {
        match self.sessions.write().await.remove(token) {
            Some(session) => {
                info!(username = %session.username, "Session ended");
                true
            }
            None => false,
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}
