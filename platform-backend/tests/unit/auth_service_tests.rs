// tests/unit/auth_service_tests.rs
use platform_backend::domain::dashboard::Dashboard;
use platform_backend::error::AppError;
use platform_backend::repository::user_repository::UserRepository;
use platform_backend::service::auth_service::{AuthService, RegisterOutcome};
use platform_backend::service::session_service::SessionRegistry;
use std::sync::Arc;

use crate::common::db::TestDatabase;

fn auth_service(db: &TestDatabase) -> AuthService {
    AuthService::new(
        Arc::new(UserRepository::new(db.connection.clone())),
        Arc::new(TestDatabase::password_manager(&db.config)),
    )
}

#[tokio::test]
async fn test_login_with_default_accounts() {
    let db = TestDatabase::seeded().await;
    let service = auth_service(&db);

    let admin = service.login("admin", "admin123").await.unwrap().unwrap();
    assert_eq!(admin.role, "admin");

    let data = service.login("data", "data123").await.unwrap().unwrap();
    assert_eq!(data.role, "data_science");
}

#[tokio::test]
async fn test_login_failures_are_indistinguishable() {
    let db = TestDatabase::seeded().await;
    let service = auth_service(&db);

    assert!(service.login("admin", "wrong").await.unwrap().is_none());
    assert!(service.login("nobody", "admin123").await.unwrap().is_none());
}

#[tokio::test]
async fn test_unknown_user_never_matches_placeholder_hash() {
    let db = TestDatabase::new().await;
    let service = auth_service(&db);

    // 未登録ユーザーは照合専用ハッシュで検証されるが、ログインは常に失敗する
    for password in ["", "admin123", "no-such-user-placeholder"] {
        assert!(service.login("ghost", password).await.unwrap().is_none());
    }
}

#[tokio::test]
async fn test_register_then_login() {
    let db = TestDatabase::new().await;
    let service = auth_service(&db);

    let outcome = service.register("alice", "s3cret", "data_science").await.unwrap();
    let RegisterOutcome::Created(user) = outcome else {
        panic!("expected a new user");
    };
    assert_eq!(user.username, "alice");
    assert_eq!(user.role, "data_science");

    assert!(service.login("alice", "s3cret").await.unwrap().is_some());
}

#[tokio::test]
async fn test_duplicate_registration_keeps_original_password() {
    let db = TestDatabase::new().await;
    let service = auth_service(&db);

    service.register("bob", "first", "security").await.unwrap();
    let second = service.register("bob", "second", "admin").await.unwrap();
    assert_eq!(second, RegisterOutcome::AlreadyExists);

    let bob = service.login("bob", "first").await.unwrap().unwrap();
    assert_eq!(bob.role, "security");
    assert!(service.login("bob", "second").await.unwrap().is_none());
}

#[tokio::test]
async fn test_register_rejects_unknown_role() {
    let db = TestDatabase::new().await;
    let service = auth_service(&db);

    let result = service.register("carol", "pw", "superuser").await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));

    let result = service.register("  ", "pw", "admin").await;
    assert!(matches!(result, Err(AppError::ValidationError(_))));
}

#[tokio::test]
async fn test_legacy_role_alias() {
    let db = TestDatabase::new().await;
    let service = auth_service(&db);

    let outcome = service.register("dave", "pw", "cybersecurity").await.unwrap();
    let RegisterOutcome::Created(user) = outcome else {
        panic!("expected a new user");
    };
    assert_eq!(user.role, "security");
    assert!(AuthService::authorize(&user.role, Dashboard::Security));
}

#[test]
fn test_authorization_fails_closed() {
    assert!(AuthService::authorize("admin", Dashboard::ItOps));
    assert!(AuthService::authorize("security", Dashboard::Executive));
    assert!(!AuthService::authorize("security", Dashboard::Data));
    assert!(!AuthService::authorize("data_science", Dashboard::ItOps));
    assert!(!AuthService::authorize("it_operations", Dashboard::Security));
    assert!(!AuthService::authorize("", Dashboard::Executive));
    assert!(!AuthService::authorize("guest", Dashboard::Assistant));

    assert!(AuthService::authorize_id("it_operations", "it_ops"));
    assert!(!AuthService::authorize_id("admin", "billing"));
}

#[tokio::test]
async fn test_session_lifecycle() {
    let db = TestDatabase::seeded().await;
    let service = auth_service(&db);
    let registry = SessionRegistry::new();

    let user = service.login("it", "it123").await.unwrap().unwrap();
    let session = registry.create(&user).await;
    assert_eq!(
        session.dashboards(),
        vec![Dashboard::Executive, Dashboard::ItOps, Dashboard::Assistant]
    );
    assert_eq!(registry.get(&session.token).await, Some(session.clone()));

    assert!(registry.remove(&session.token).await);
    assert!(registry.get(&session.token).await.is_none());
    assert!(!registry.remove(&session.token).await);
}
