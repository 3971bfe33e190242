// src/main.rs
use platform_backend::api::handlers::app_router;
use platform_backend::api::AppState;
use platform_backend::config::Config;
use platform_backend::db::{create_db_pool, init_database, DEFAULT_USERS_WARNING};
use platform_backend::logging::init_tracing;
use platform_backend::utils::password::PasswordManager;
use std::sync::Arc;
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    tracing::info!("Starting Intelligence Platform backend...");

    // 設定を読み込む
    let app_config = Config::from_env()?;
    tracing::info!(
        environment = %app_config.environment,
        database_url = %app_config.database.url,
        "Configuration loaded"
    );

    // データベース接続を作成
    let db_pool = create_db_pool(&app_config.database).await?;
    tracing::info!("Database pool created successfully.");

    let password_manager = Arc::new(PasswordManager::new(app_config.argon2.clone())?);

    let seeded = init_database(&db_pool, &password_manager, app_config.seed_default_users).await?;
    if seeded > 0 {
        tracing::warn!(created = seeded, "{}", DEFAULT_USERS_WARNING);
    }

    // ルーターの設定
    let app_state = AppState::new(db_pool, password_manager, &app_config);
    let app_router = app_router(app_state);

    let server_addr = app_config.server_addr();
    tracing::info!("Router configured. Server listening on {}", server_addr);

    let listener = TcpListener::bind(&server_addr).await?;
    axum::serve(listener, app_router.into_make_service()).await?;

    Ok(())
}
