// src/service/export_service.rs

//! 現在の行をCSVテキストとして書き出す

use crate::error::{AppError, AppResult};
use crate::repository::dataset_repository::DatasetRepository;
use crate::repository::it_ticket_repository::ItTicketRepository;
use crate::repository::security_incident_repository::SecurityIncidentRepository;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;

pub const INCIDENT_COLUMNS: [&str; 10] = [
    "id",
    "title",
    "description",
    "threat_type",
    "severity",
    "status",
    "created_at",
    "resolved_at",
    "resolution_time_hours",
    "assigned_to",
];

pub const DATASET_COLUMNS: [&str; 10] = [
    "id",
    "name",
    "source_department",
    "size_mb",
    "row_count",
    "column_count",
    "quality_score",
    "sensitivity",
    "last_accessed",
    "created_at",
];

pub const TICKET_COLUMNS: [&str; 12] = [
    "id",
    "title",
    "description",
    "status",
    "assigned_to",
    "current_stage",
    "priority",
    "category",
    "created_at",
    "resolved_at",
    "time_in_stage_hours",
    "stage_entered_at",
];

fn csv_error(err: impl std::fmt::Display) -> AppError {
    AppError::InternalServerError(format!("Failed to write CSV: {}", err))
}

/// ヘッダー行を明示して書き出す（行が0件でもヘッダーは出る）
pub fn write_csv<T: Serialize>(columns: &[&str], rows: &[T]) -> AppResult<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(columns).map_err(csv_error)?;
    for row in rows {
        writer.serialize(row).map_err(csv_error)?;
    }

    let bytes = writer.into_inner().map_err(csv_error)?;
    String::from_utf8(bytes).map_err(csv_error)
}

/// エグゼクティブサマリー（種別ごとの件数）
pub fn executive_summary_csv(
    incidents: u64,
    datasets: u64,
    tickets: u64,
    exported_at: DateTime<Utc>,
) -> AppResult<String> {
    let date = exported_at.format("%Y-%m-%d").to_string();
    let rows = [
        ("Cyber Incidents", incidents, date.as_str()),
        ("Datasets", datasets, date.as_str()),
        ("IT Tickets", tickets, date.as_str()),
    ];
    write_csv(&["Category", "Count", "Export_Date"], &rows)
}

/// CSVエクスポートサービス
pub struct ExportService {
    incident_repo: Arc<SecurityIncidentRepository>,
    dataset_repo: Arc<DatasetRepository>,
    ticket_repo: Arc<ItTicketRepository>,
}

impl ExportService {
    pub fn new(
        incident_repo: Arc<SecurityIncidentRepository>,
        dataset_repo: Arc<DatasetRepository>,
        ticket_repo: Arc<ItTicketRepository>,
    ) -> Self {
        Self {
            incident_repo,
            dataset_repo,
            ticket_repo,
        }
    }

    pub async fn export_incidents(&self) -> AppResult<String> {
        let rows = self.incident_repo.find_all().await?;
        info!(rows = rows.len(), "Exporting incidents");
        write_csv(&INCIDENT_COLUMNS, &rows)
    }

    pub async fn export_datasets(&self) -> AppResult<String> {
        let rows = self.dataset_repo.find_all().await?;
        info!(rows = rows.len(), "Exporting datasets");
        write_csv(&DATASET_COLUMNS, &rows)
    }

    pub async fn export_tickets(&self) -> AppResult<String> {
        let rows = self.ticket_repo.find_all().await?;
        info!(rows = rows.len(), "Exporting tickets");
        write_csv(&TICKET_COLUMNS, &rows)
    }
}
