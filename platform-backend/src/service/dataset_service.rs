// src/service/dataset_service.rs
use crate::api::dto::dataset_dto::{CreateDatasetDto, DatasetFilterQuery};
use crate::domain::dataset_model::{Model as DatasetModel, NewDataset};
use crate::domain::dataset_types::is_valid_quality_score;
use crate::error::{AppError, AppResult};
use crate::repository::dataset_repository::DatasetRepository;
use crate::service::incident_service::NO_SUCH_RECORD;
use crate::service::search_service;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub struct DatasetService {
    repo: Arc<DatasetRepository>,
}

impl DatasetService {
    pub fn new(repo: Arc<DatasetRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_dataset(&self, payload: CreateDatasetDto) -> AppResult<i32> {
        payload.validate()?;
        let dataset = payload
            .into_new_dataset()
            .map_err(AppError::ValidationError)?;
        self.create_validated(dataset).await
    }

    async fn create_validated(&self, dataset: NewDataset) -> AppResult<i32> {
        let id = self.repo.create(dataset).await?;
        info!(dataset_id = id, "Dataset metadata created");
        Ok(id)
    }

    pub async fn search_datasets(&self, query: &DatasetFilterQuery) -> AppResult<Vec<DatasetModel>> {
        let datasets = self.repo.find_all().await?;
        Ok(search_service::filter_datasets(datasets, query))
    }

    pub async fn get_dataset(&self, id: i32) -> AppResult<DatasetModel> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_SUCH_RECORD.to_string()))
    }

    /// 品質スコアを更新（範囲外の値はストアに渡す前に拒否）
    pub async fn update_quality(&self, id: i32, quality_score: f64) -> AppResult<DatasetModel> {
        if !is_valid_quality_score(quality_score) {
            return Err(AppError::ValidationError(
                "Quality score must be between 0 and 10".to_string(),
            ));
        }

        if !self.repo.update_quality(id, quality_score).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }

        info!(dataset_id = id, quality_score, "Dataset quality updated");
        self.get_dataset(id).await
    }

    pub async fn delete_dataset(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }
        info!(dataset_id = id, "Dataset metadata deleted");
        Ok(())
    }
}
