// tests/unit/seeding_tests.rs
use platform_backend::db::{init_database, DEFAULT_USERS};
use platform_backend::domain::role_model::RoleName;
use platform_backend::repository::statistics_repository::{DashboardStatistics, StatisticsRepository};
use platform_backend::repository::user_repository::UserRepository;

use crate::common::db::TestDatabase;

#[tokio::test]
async fn test_seeding_is_idempotent() {
    let db = TestDatabase::seeded().await;
    let repo = UserRepository::new(db.connection.clone());
    assert_eq!(repo.count().await.unwrap(), DEFAULT_USERS.len() as u64);

    // 2回目は何も作成しない
    let manager = TestDatabase::password_manager(&db.config);
    let created = init_database(&db.connection, &manager, true).await.unwrap();
    assert_eq!(created, 0);
    assert_eq!(repo.count().await.unwrap(), DEFAULT_USERS.len() as u64);
}

#[tokio::test]
async fn test_seeding_skips_existing_users_individually() {
    let db = TestDatabase::new().await;
    let repo = UserRepository::new(db.connection.clone());
    let manager = TestDatabase::password_manager(&db.config);

    let custom_hash = manager.hash_password("rotated-secret").unwrap();
    assert!(repo
        .create("cyber", &custom_hash, RoleName::Security)
        .await
        .unwrap());

    let created = init_database(&db.connection, &manager, true).await.unwrap();
    assert_eq!(created, DEFAULT_USERS.len() - 1);
    assert_eq!(repo.count().await.unwrap(), DEFAULT_USERS.len() as u64);

    // 既存ユーザーは上書きしない
    let cyber = repo.find_by_username("cyber").await.unwrap().unwrap();
    assert_eq!(cyber.password_hash, custom_hash);
}

#[tokio::test]
async fn test_default_roles() {
    let db = TestDatabase::seeded().await;
    let repo = UserRepository::new(db.connection.clone());

    let cyber = repo.find_by_username("cyber").await.unwrap().unwrap();
    assert_eq!(cyber.role, "security");
    let it = repo.find_by_username("it").await.unwrap().unwrap();
    assert_eq!(it.role, "it_operations");
    // 平文のパスワードは保存しない
    assert_ne!(it.password_hash, "it123");
}

#[tokio::test]
async fn test_seeding_can_be_disabled() {
    let db = TestDatabase::new().await;
    let repo = UserRepository::new(db.connection.clone());
    assert_eq!(repo.count().await.unwrap(), 0);
}

#[tokio::test]
async fn test_empty_statistics_are_zero() {
    let db = TestDatabase::new().await;
    let stats = StatisticsRepository::new(db.connection.clone())
        .get_statistics()
        .await
        .unwrap();
    assert_eq!(stats, DashboardStatistics::default());
}
