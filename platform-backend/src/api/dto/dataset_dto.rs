// src/api/dto/dataset_dto.rs

use super::{parse_optional, require};
use crate::domain::dataset_model::NewDataset;
use crate::domain::dataset_types::{is_valid_quality_score, Department};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct CreateDatasetDto {
    #[validate(length(max = 200, message = "Name must not exceed 200 characters"))]
    pub name: String,

    pub source_department: String,

    #[validate(range(min = 0.0, message = "size_mb must not be negative"))]
    pub size_mb: f64,

    #[validate(range(min = 0, message = "row_count must not be negative"))]
    pub row_count: i64,

    #[validate(range(min = 0, message = "column_count must not be negative"))]
    pub column_count: i64,

    #[validate(range(
        min = 0.0,
        max = 10.0,
        message = "Quality score must be between 0 and 10"
    ))]
    pub quality_score: Option<f64>,

    pub sensitivity: Option<String>,
    pub last_accessed: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
}

impl CreateDatasetDto {
    /// 必須項目と列挙値を検証して登録用の値に変換
    pub fn into_new_dataset(self) -> Result<NewDataset, String> {
        require(&self.name, "name")?;
        require(&self.source_department, "source_department")?;

        if !self.size_mb.is_finite() {
            return Err("Invalid size_mb value".to_string());
        }
        if let Some(score) = self.quality_score {
            if !is_valid_quality_score(score) {
                return Err("Quality score must be between 0 and 10".to_string());
            }
        }

        Ok(NewDataset {
            name: self.name.trim().to_string(),
            source_department: self.source_department.parse::<Department>()?,
            size_mb: self.size_mb,
            row_count: self.row_count,
            column_count: self.column_count,
            quality_score: self.quality_score,
            sensitivity: parse_optional(self.sensitivity)?,
            last_accessed: self.last_accessed,
            created_at: self.created_at,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, Validate)]
pub struct UpdateQualityDto {
    #[validate(range(
        min = 0.0,
        max = 10.0,
        message = "Quality score must be between 0 and 10"
    ))]
    pub quality_score: f64,
}

/// 一覧の検索条件
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct DatasetFilterQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub sensitivity: Option<String>,
    pub min_quality: Option<f64>,
    pub max_quality: Option<f64>,
}
