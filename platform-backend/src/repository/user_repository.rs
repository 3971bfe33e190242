// src/repository/user_repository.rs

use crate::domain::role_model::RoleName;
use crate::domain::user_model::{self, ActiveModel as UserActiveModel, Entity as UserEntity};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, PaginatorTrait, Set, SqlErr};

#[derive(Debug, Clone)]
pub struct UserRepository {
    db: DbConn,
}

impl UserRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// ユーザーをユーザー名で検索
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<user_model::Model>, DbErr> {
        UserEntity::find_by_id(username.to_string())
            .one(&self.db)
            .await
    }

    /// ユーザーを作成
    ///
    /// ユーザー名が既に存在する場合は上書きせず `Ok(false)` を返す。
    pub async fn create(
        &self,
        username: &str,
        password_hash: &str,
        role: RoleName,
    ) -> Result<bool, DbErr> {
        if self.find_by_username(username).await?.is_some() {
            return Ok(false);
        }

        let new_user = UserActiveModel {
            username: Set(username.to_string()),
            password_hash: Set(password_hash.to_string()),
            role: Set(role.to_string()),
            created_at: Set(Utc::now()),
        };

        match UserEntity::insert(new_user)
            .exec_without_returning(&self.db)
            .await
        {
            Ok(_) => Ok(true),
            // 確認後に別リクエストが同じ名前で登録した場合
            Err(err) if matches!(err.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                Ok(false)
            }
            Err(err) => Err(err),
        }
    }

    /// ユーザー数を取得
    pub async fn count(&self) -> Result<u64, DbErr> {
        UserEntity::find().count(&self.db).await
    }
}
