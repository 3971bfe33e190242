// src/config/app.rs

use crate::utils::password::Argon2Config;
use std::env;
use std::time::Duration;

const DEFAULT_DATABASE_URL: &str = "sqlite://intelligence_platform.db?mode=rwc";

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    /// ロック取得の待ち時間上限
    pub busy_timeout: Duration,
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    /// 初回起動時にデフォルトユーザーを作成するか
    pub seed_default_users: bool,
    pub argon2: Argon2Config,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok(); // .env ファイルを読み込む (存在しなくてもエラーにしない)

        let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

        Ok(Self {
            environment,
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "5000".to_string())
                .parse()
                .map_err(|_| "Invalid PORT value")?,
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
                busy_timeout: Duration::from_secs(
                    env::var("DB_BUSY_TIMEOUT_SECS")
                        .unwrap_or_else(|_| "30".to_string())
                        .parse()
                        .map_err(|_| "Invalid DB_BUSY_TIMEOUT_SECS value")?,
                ),
                max_connections: env::var("DB_MAX_CONNECTIONS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .map_err(|_| "Invalid DB_MAX_CONNECTIONS value")?,
            },
            seed_default_users: env::var("SEED_DEFAULT_USERS")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .map_err(|_| "Invalid SEED_DEFAULT_USERS value")?,
            argon2: Argon2Config::from_env(),
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// テスト用の設定を作成
    ///
    /// ハッシュコストを下げ、DBはインメモリを既定とする。
    pub fn for_testing() -> Self {
        Self {
            environment: "test".to_string(),
            host: "127.0.0.1".to_string(),
            port: 5000,
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                busy_timeout: Duration::from_secs(5),
                max_connections: 1,
            },
            seed_default_users: true,
            argon2: Argon2Config::for_testing(),
        }
    }

    /// 指定したデータベースURLでテスト用設定を作成
    pub fn for_testing_with_database(url: impl Into<String>) -> Self {
        let mut config = Self::for_testing();
        config.database.url = url.into();
        config.database.max_connections = 5;
        config
    }
}
