// src/repository/statistics_repository.rs

use crate::domain::incident_types::{IncidentStatus, Severity};
use crate::domain::ticket_types::TicketStatus;
use crate::domain::{dataset_model, it_ticket_model, security_incident_model, user_model};
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, PaginatorTrait, QueryFilter, QuerySelect};
use serde::{Deserialize, Serialize};

/// ダッシュボードのサマリー用集計値
///
/// 空のテーブルでは件数・合計・平均すべて0になる。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardStatistics {
    pub user_count: u64,
    pub total_incidents: u64,
    pub open_incidents: u64,
    /// High または Critical の件数
    pub critical_incidents: u64,
    pub total_datasets: u64,
    pub avg_quality: f64,
    pub total_data_size_mb: f64,
    pub total_tickets: u64,
    pub open_tickets: u64,
    pub avg_resolution_time_hours: f64,
}

/// 値の平均（空なら0）
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[derive(Debug, Clone)]
pub struct StatisticsRepository {
    db: DbConn,
}

impl StatisticsRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// 4テーブル分の件数と平均を集計
    pub async fn get_statistics(&self) -> Result<DashboardStatistics, DbErr> {
        use dataset_model::{Column as DatasetColumn, Entity as DatasetEntity};
        use it_ticket_model::{Column as TicketColumn, Entity as TicketEntity};
        use security_incident_model::{Column as IncidentColumn, Entity as IncidentEntity};

        let user_count = user_model::Entity::find().count(&self.db).await?;

        let total_incidents = IncidentEntity::find().count(&self.db).await?;
        let open_incidents = IncidentEntity::find()
            .filter(IncidentColumn::Status.eq(IncidentStatus::Open.as_str()))
            .count(&self.db)
            .await?;
        let critical_incidents = IncidentEntity::find()
            .filter(IncidentColumn::Severity.is_in([
                Severity::High.as_str(),
                Severity::Critical.as_str(),
            ]))
            .count(&self.db)
            .await?;
        let resolution_times: Vec<Option<f64>> = IncidentEntity::find()
            .select_only()
            .column(IncidentColumn::ResolutionTimeHours)
            .filter(IncidentColumn::ResolutionTimeHours.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await?;

        let total_datasets = DatasetEntity::find().count(&self.db).await?;
        let quality_scores: Vec<Option<f64>> = DatasetEntity::find()
            .select_only()
            .column(DatasetColumn::QualityScore)
            .filter(DatasetColumn::QualityScore.is_not_null())
            .into_tuple()
            .all(&self.db)
            .await?;
        let sizes: Vec<f64> = DatasetEntity::find()
            .select_only()
            .column(DatasetColumn::SizeMb)
            .into_tuple()
            .all(&self.db)
            .await?;

        let total_tickets = TicketEntity::find().count(&self.db).await?;
        let open_tickets = TicketEntity::find()
            .filter(TicketColumn::Status.eq(TicketStatus::Open.as_str()))
            .count(&self.db)
            .await?;

        let quality_scores: Vec<f64> = quality_scores.into_iter().flatten().collect();
        let resolution_times: Vec<f64> = resolution_times.into_iter().flatten().collect();

        Ok(DashboardStatistics {
            user_count,
            total_incidents,
            open_incidents,
            critical_incidents,
            total_datasets,
            avg_quality: mean(&quality_scores),
            total_data_size_mb: sizes.iter().sum(),
            total_tickets,
            open_tickets,
            avg_resolution_time_hours: mean(&resolution_times),
        })
    }
}
