// migration/src/lib.rs
pub use sea_orm_migration::prelude::*;

// 認証関連マイグレーション
mod m20251001_000001_create_users_table;

// ダッシュボード用レコードテーブル
mod m20251001_000002_create_cyber_incidents_table;
mod m20251001_000003_create_datasets_metadata_table;
mod m20251001_000004_create_it_tickets_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            // 1. ユーザーテーブル（依存関係なし）
            Box::new(m20251001_000001_create_users_table::Migration),
            // 2. 各ダッシュボードのレコードテーブル
            Box::new(m20251001_000002_create_cyber_incidents_table::Migration),
            Box::new(m20251001_000003_create_datasets_metadata_table::Migration),
            Box::new(m20251001_000004_create_it_tickets_table::Migration),
        ]
    }
}
