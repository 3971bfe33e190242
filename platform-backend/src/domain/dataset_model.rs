// src/domain/dataset_model.rs

use super::dataset_types::{Department, Sensitivity};
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

/// データセットのメタデータ（データ本体は保持しない）
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "datasets_metadata")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub source_department: String,
    pub size_mb: f64,
    pub row_count: i64,
    pub column_count: i64,
    pub quality_score: Option<f64>,
    pub sensitivity: Option<String>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

/// データセット登録時の入力
///
/// 品質スコアの範囲チェックは入力境界で済んでいる前提で、ここでは丸めない。
#[derive(Debug, Clone, PartialEq)]
pub struct NewDataset {
    pub name: String,
    pub source_department: Department,
    pub size_mb: f64,
    pub row_count: i64,
    pub column_count: i64,
    pub quality_score: Option<f64>,
    pub sensitivity: Option<Sensitivity>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}
