//! テストごとに一時ファイルのSQLiteを用意するヘルパー

use platform_backend::config::AppConfig;
use platform_backend::db::{create_db_pool, init_database, DbPool};
use platform_backend::utils::password::PasswordManager;
use tempfile::TempDir;

pub struct TestDatabase {
    // ディレクトリはテスト終了まで保持する
    _dir: TempDir,
    pub config: AppConfig,
    pub connection: DbPool,
}

impl TestDatabase {
    /// マイグレーション済みの空のデータベース
    pub async fn new() -> Self {
        Self::create(false).await
    }

    /// デフォルトユーザーを作成済みのデータベース
    pub async fn seeded() -> Self {
        Self::create(true).await
    }

    async fn create(seed: bool) -> Self {
        super::init_test_env();

        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("platform_test.db");
        let url = format!("sqlite://{}?mode=rwc", path.display());
        let config = AppConfig::for_testing_with_database(url);

        let connection = create_db_pool(&config.database)
            .await
            .expect("open sqlite database");
        init_database(&connection, &Self::password_manager(&config), seed)
            .await
            .expect("run migrations");

        Self {
            _dir: dir,
            config,
            connection,
        }
    }

    pub fn password_manager(config: &AppConfig) -> PasswordManager {
        PasswordManager::new(config.argon2.clone()).expect("test argon2 config")
    }
}
