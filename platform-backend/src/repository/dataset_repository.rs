// src/repository/dataset_repository.rs

use crate::domain::dataset_model::{
    self, ActiveModel as DatasetActiveModel, Entity as DatasetEntity, NewDataset,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::sea_query::Expr;
use sea_orm::{DbConn, DbErr, QueryFilter, QueryOrder, Set, TransactionTrait};

#[derive(Debug, Clone)]
pub struct DatasetRepository {
    db: DbConn,
}

impl DatasetRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// データセットを登録し、採番されたIDを返す
    pub async fn create(&self, dataset: NewDataset) -> Result<i32, DbErr> {
        let result = DatasetEntity::insert(Self::to_active_model(dataset))
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id)
    }

    /// 複数件をまとめて登録（1件でも失敗したら全件ロールバック）
    pub async fn create_many(&self, items: Vec<NewDataset>) -> Result<Vec<i32>, DbErr> {
        let txn = self.db.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for item in items {
            let result = DatasetEntity::insert(Self::to_active_model(item))
                .exec(&txn)
                .await?;
            ids.push(result.last_insert_id);
        }

        txn.commit().await?;
        Ok(ids)
    }

    /// 全データセットを新しい順に取得
    pub async fn find_all(&self) -> Result<Vec<dataset_model::Model>, DbErr> {
        DatasetEntity::find()
            .order_by_desc(dataset_model::Column::CreatedAt)
            .order_by_desc(dataset_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<dataset_model::Model>, DbErr> {
        DatasetEntity::find_by_id(id).one(&self.db).await
    }

    /// 品質スコアを更新し、最終アクセス日時を現在時刻にする
    ///
    /// スコアは検証済みの前提で、ここでは丸めない。
    pub async fn update_quality(&self, id: i32, quality_score: f64) -> Result<bool, DbErr> {
        let result = DatasetEntity::update_many()
            .col_expr(
                dataset_model::Column::QualityScore,
                Expr::value(Some(quality_score)),
            )
            .col_expr(
                dataset_model::Column::LastAccessed,
                Expr::value(Some(Utc::now())),
            )
            .filter(dataset_model::Column::Id.eq(id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// データセットを削除（存在しなければ `Ok(false)`）
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = DatasetEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    fn to_active_model(dataset: NewDataset) -> DatasetActiveModel {
        DatasetActiveModel {
            name: Set(dataset.name),
            source_department: Set(dataset.source_department.to_string()),
            size_mb: Set(dataset.size_mb),
            row_count: Set(dataset.row_count),
            column_count: Set(dataset.column_count),
            quality_score: Set(dataset.quality_score),
            sensitivity: Set(dataset.sensitivity.map(String::from)),
            last_accessed: Set(dataset.last_accessed),
            created_at: Set(dataset.created_at.unwrap_or_else(Utc::now)),
            ..Default::default()
        }
    }
}
