// src/service/executive_service.rs

//! エグゼクティブダッシュボード向けの集計とKPI

use crate::domain::incident_types::{IncidentStatus, Severity};
use crate::domain::ticket_types::TicketStatus;
use crate::domain::{dataset_model, it_ticket_model, security_incident_model};
use crate::error::AppResult;
use crate::repository::dataset_repository::DatasetRepository;
use crate::repository::it_ticket_repository::ItTicketRepository;
use crate::repository::security_incident_repository::SecurityIncidentRepository;
use crate::repository::statistics_repository::{mean, DashboardStatistics, StatisticsRepository};
use crate::service::export_service::executive_summary_csv;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub const DEFAULT_SECURITY_POSTURE: i64 = 85;
pub const DEFAULT_SYSTEM_HEALTH: i64 = 92;
pub const DEFAULT_DATA_QUALITY: f64 = 0.87;

/// 経営層向けの3指標
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutiveKpis {
    /// 0〜100
    pub security_posture: i64,
    /// 解決済みチケットの割合（%）
    pub system_health: i64,
    /// 平均品質スコア / 10
    pub data_quality: f64,
}

/// 解決率を加点、Critical件数を減点したセキュリティスコア
pub fn security_posture(incidents: &[security_incident_model::Model]) -> i64 {
    if incidents.is_empty() {
        return DEFAULT_SECURITY_POSTURE;
    }

    let total = incidents.len() as f64;
    let resolved = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Resolved.as_str())
        .count() as f64;
    let critical = incidents
        .iter()
        .filter(|i| i.severity == Severity::Critical.as_str())
        .count() as f64;

    let score = 85.0 + (resolved / total) * 10.0 - critical * 5.0;
    (score.trunc() as i64).clamp(0, 100)
}

/// Resolved のチケットの割合（Closed は含めない）
pub fn system_health(tickets: &[it_ticket_model::Model]) -> i64 {
    if tickets.is_empty() {
        return DEFAULT_SYSTEM_HEALTH;
    }

    let resolved = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Resolved.as_str())
        .count() as f64;

    (resolved / tickets.len() as f64 * 100.0).trunc() as i64
}

pub fn data_quality(datasets: &[dataset_model::Model]) -> f64 {
    let scores: Vec<f64> = datasets.iter().filter_map(|d| d.quality_score).collect();
    if scores.is_empty() {
        return DEFAULT_DATA_QUALITY;
    }
    mean(&scores) / 10.0
}

pub struct ExecutiveService {
    statistics_repo: Arc<StatisticsRepository>,
    incident_repo: Arc<SecurityIncidentRepository>,
    dataset_repo: Arc<DatasetRepository>,
    ticket_repo: Arc<ItTicketRepository>,
}

impl ExecutiveService {
    pub fn new(
        statistics_repo: Arc<StatisticsRepository>,
        incident_repo: Arc<SecurityIncidentRepository>,
        dataset_repo: Arc<DatasetRepository>,
        ticket_repo: Arc<ItTicketRepository>,
    ) -> Self {
        Self {
            statistics_repo,
            incident_repo,
            dataset_repo,
            ticket_repo,
        }
    }

    pub async fn get_statistics(&self) -> AppResult<DashboardStatistics> {
        Ok(self.statistics_repo.get_statistics().await?)
    }

    pub async fn get_kpis(&self) -> AppResult<ExecutiveKpis> {
        let incidents = self.incident_repo.find_all().await?;
        let datasets = self.dataset_repo.find_all().await?;
        let tickets = self.ticket_repo.find_all().await?;

        Ok(ExecutiveKpis {
            security_posture: security_posture(&incidents),
            system_health: system_health(&tickets),
            data_quality: data_quality(&datasets),
        })
    }

    /// 種別ごとの件数をCSVで出力
    pub async fn export_summary(&self) -> AppResult<String> {
        let stats = self.get_statistics().await?;
        executive_summary_csv(
            stats.total_incidents,
            stats.total_datasets,
            stats.total_tickets,
            Utc::now(),
        )
    }
}
