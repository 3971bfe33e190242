// src/db.rs
use crate::config::DatabaseConfig;
use crate::domain::role_model::RoleName;
use crate::error::AppResult;
use crate::repository::user_repository::UserRepository;
use crate::utils::password::PasswordManager;
use migration::{Migrator, MigratorTrait};
use sea_orm::sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use sea_orm::{DatabaseConnection, DbErr, RuntimeErr, SqlxSqliteConnector};
use std::str::FromStr;
use tracing::info;

pub type DbPool = DatabaseConnection;

/// 初回起動時に作成するデフォルトアカウント（ユーザー名, パスワード, ロール）
pub const DEFAULT_USERS: [(&str, &str, RoleName); 4] = [
    ("admin", "admin123", RoleName::Admin),
    ("cyber", "cyber123", RoleName::Security),
    ("data", "data123", RoleName::DataScience),
    ("it", "it123", RoleName::ItOperations),
];

/// デフォルトアカウントを作成したときの起動時警告
pub const DEFAULT_USERS_WARNING: &str = "Default accounts with well-known passwords were created; \
     set SEED_DEFAULT_USERS=false and provision accounts with generate-password-hash before exposing the server";

fn sqlx_conn_err(err: sea_orm::sqlx::Error) -> DbErr {
    DbErr::Conn(RuntimeErr::SqlxError(err))
}

/// SQLite接続プールを作成
///
/// ロック取得は `busy_timeout` まで待機し、超えた場合は操作がエラーになる。
pub async fn create_db_pool(config: &DatabaseConfig) -> Result<DbPool, DbErr> {
    let options = SqliteConnectOptions::from_str(&config.url)
        .map_err(sqlx_conn_err)?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .busy_timeout(config.busy_timeout);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(1)
        .acquire_timeout(config.busy_timeout)
        .connect_with(options)
        .await
        .map_err(sqlx_conn_err)?;

    Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
}

/// マイグレーションを適用し、必要ならデフォルトユーザーを作成する
///
/// 何度呼び出しても結果は同じ。返り値は今回新規に作成したユーザー数。
pub async fn init_database(
    db: &DbPool,
    password_manager: &PasswordManager,
    seed_default_users: bool,
) -> AppResult<usize> {
    Migrator::up(db, None).await?;
    info!("Database schema is up to date");

    if !seed_default_users {
        return Ok(0);
    }

    seed_users(db, password_manager).await
}

/// デフォルトユーザーを1件ずつ確認し、存在しないものだけ作成
pub async fn seed_users(db: &DbPool, password_manager: &PasswordManager) -> AppResult<usize> {
    let users = UserRepository::new(db.clone());
    let mut created = 0;

    for (username, password, role) in DEFAULT_USERS {
        if users.find_by_username(username).await?.is_some() {
            continue;
        }

        let password_hash = password_manager.hash_password(password)?;
        if users.create(username, &password_hash, role).await? {
            info!(username = %username, role = %role, "Seeded default user");
            created += 1;
        }
    }

    Ok(created)
}
