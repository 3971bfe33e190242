// tests/common/app_helper.rs

use super::db::TestDatabase;
use axum::Router;
use platform_backend::api::{handlers::app_router, AppState};
use std::sync::Arc;

/// デフォルトユーザー入りのアプリをセットアップ
pub async fn setup_app() -> (Router, AppState, TestDatabase) {
    let db = TestDatabase::seeded().await;
    let password_manager = Arc::new(TestDatabase::password_manager(&db.config));

    let app_state = AppState::new(db.connection.clone(), password_manager, &db.config);
    let app = app_router(app_state.clone());

    (app, app_state, db)
}
