// src/service/incident_service.rs
use crate::api::dto::incident_dto::{CreateIncidentDto, IncidentFilterQuery};
use crate::domain::incident_types::IncidentStatus;
use crate::domain::security_incident_model::{Model as IncidentModel, NewIncident};
use crate::error::{AppError, AppResult};
use crate::repository::security_incident_repository::SecurityIncidentRepository;
use crate::service::search_service;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub const NO_SUCH_RECORD: &str = "No such record";

pub struct IncidentService {
    repo: Arc<SecurityIncidentRepository>,
}

impl IncidentService {
    pub fn new(repo: Arc<SecurityIncidentRepository>) -> Self {
        Self { repo }
    }

    /// 入力を検証してインシデントを登録
    pub async fn create_incident(&self, payload: CreateIncidentDto) -> AppResult<i32> {
        payload.validate()?;
        let incident = payload
            .into_new_incident()
            .map_err(AppError::ValidationError)?;
        self.create_validated(incident).await
    }

    /// 検証済みの入力を登録
    async fn create_validated(&self, incident: NewIncident) -> AppResult<i32> {
        let severity = incident.severity;
        let id = self.repo.create(incident).await?;
        info!(incident_id = id, severity = %severity, "Incident created");
        Ok(id)
    }

    pub async fn search_incidents(&self, query: &IncidentFilterQuery) -> AppResult<Vec<IncidentModel>> {
        let incidents = self.repo.find_all().await?;
        Ok(search_service::filter_incidents(incidents, query))
    }

    pub async fn get_incident(&self, id: i32) -> AppResult<IncidentModel> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_SUCH_RECORD.to_string()))
    }

    /// ステータス更新（解決時間は初回解決時のみ記録される）
    pub async fn update_status(&self, id: i32, status: &str) -> AppResult<IncidentModel> {
        let status: IncidentStatus = status.parse().map_err(AppError::ValidationError)?;

        if !self.repo.update_status(id, status).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }

        info!(incident_id = id, status = %status, "Incident status updated");
        self.get_incident(id).await
    }

    pub async fn delete_incident(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }
        info!(incident_id = id, "Incident deleted");
        Ok(())
    }
}
