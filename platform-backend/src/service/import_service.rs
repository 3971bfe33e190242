// src/service/import_service.rs

//! CSV一括取り込み
//!
//! 全行を検証してからまとめて登録する。1行でも不正があれば何も登録しない。

use crate::api::dto::dataset_dto::CreateDatasetDto;
use crate::api::dto::first_validation_message;
use crate::api::dto::incident_dto::CreateIncidentDto;
use crate::api::dto::ticket_dto::CreateTicketDto;
use crate::domain::dataset_model::NewDataset;
use crate::domain::it_ticket_model::NewTicket;
use crate::domain::security_incident_model::NewIncident;
use crate::error::{AppError, AppResult};
use crate::repository::dataset_repository::DatasetRepository;
use crate::repository::it_ticket_repository::ItTicketRepository;
use crate::repository::security_incident_repository::SecurityIncidentRepository;
use crate::utils::time::parse_timestamp;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{info, warn};
use validator::Validate;

/// 利用者に返す行エラーの上限
pub const MAX_REPORTED_ERRORS: usize = 10;

type CsvRow = HashMap<String, String>;

const INCIDENT_REQUIRED: [&str; 4] = ["title", "threat_type", "severity", "status"];
const DATASET_REQUIRED: [&str; 5] = ["name", "source_department", "size_mb", "row_count", "column_count"];
const TICKET_REQUIRED: [&str; 3] = ["title", "status", "assigned_to"];

/// CSVテキストをヘッダー名をキーにした行の一覧に変換
pub fn read_rows(csv_text: &str) -> AppResult<Vec<CsvRow>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_text.as_bytes());

    let headers: Vec<String> = reader
        .headers()
        .map_err(|e| AppError::BadRequest(format!("Error parsing CSV: {}", e)))?
        .iter()
        .map(|header| header.to_lowercase())
        .collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| AppError::BadRequest(format!("Error parsing CSV: {}", e)))?;
        let row = headers
            .iter()
            .cloned()
            .zip(record.iter().map(str::to_string))
            .collect();
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(AppError::ValidationError("CSV file is empty".to_string()));
    }

    Ok(rows)
}

fn text(row: &CsvRow, field: &str) -> Option<String> {
    row.get(field)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

fn check_required(row: &CsvRow, fields: &[&str]) -> Result<(), String> {
    match fields.iter().find(|field| text(row, field).is_none()) {
        Some(field) => Err(format!("Missing required field: {}", field)),
        None => Ok(()),
    }
}

fn number<T: std::str::FromStr>(row: &CsvRow, field: &str) -> Result<Option<T>, String> {
    text(row, field)
        .map(|raw| raw.parse().map_err(|_| format!("Invalid {} value", field)))
        .transpose()
}

/// 小数列の解釈（NaN・無限大は不正な値として扱う）
fn decimal(row: &CsvRow, field: &str) -> Result<Option<f64>, String> {
    match number::<f64>(row, field)? {
        Some(value) if !value.is_finite() => Err(format!("Invalid {} value", field)),
        value => Ok(value),
    }
}

fn timestamp(row: &CsvRow, field: &str) -> Result<Option<DateTime<Utc>>, String> {
    text(row, field)
        .map(|raw| parse_timestamp(&raw).ok_or_else(|| format!("Invalid {} value", field)))
        .transpose()
}

fn validated<T: Validate>(dto: T) -> Result<T, String> {
    dto.validate()
        .map_err(|errors| first_validation_message(&errors))?;
    Ok(dto)
}

fn incident_from_row(row: &CsvRow) -> Result<NewIncident, String> {
    check_required(row, &INCIDENT_REQUIRED)?;

    let dto = CreateIncidentDto {
        title: text(row, "title").unwrap_or_default(),
        description: text(row, "description"),
        threat_type: text(row, "threat_type").unwrap_or_default(),
        severity: text(row, "severity").unwrap_or_default(),
        status: text(row, "status"),
        assigned_to: text(row, "assigned_to"),
        created_at: timestamp(row, "created_at")?,
        resolved_at: timestamp(row, "resolved_at")?,
        resolution_time_hours: decimal(row, "resolution_time_hours")?,
    };

    validated(dto)?.into_new_incident()
}

fn dataset_from_row(row: &CsvRow) -> Result<NewDataset, String> {
    check_required(row, &DATASET_REQUIRED)?;

    let numbers = (
        decimal(row, "size_mb"),
        number::<i64>(row, "row_count"),
        number::<i64>(row, "column_count"),
    );
    let (Ok(Some(size_mb)), Ok(Some(row_count)), Ok(Some(column_count))) = numbers else {
        return Err("Invalid numeric values for size_mb, row_count, or column_count".to_string());
    };

    let dto = CreateDatasetDto {
        name: text(row, "name").unwrap_or_default(),
        source_department: text(row, "source_department").unwrap_or_default(),
        size_mb,
        row_count,
        column_count,
        quality_score: decimal(row, "quality_score")
            .map_err(|_| "Invalid quality_score value".to_string())?,
        sensitivity: text(row, "sensitivity"),
        last_accessed: timestamp(row, "last_accessed")?,
        created_at: timestamp(row, "created_at")?,
    };

    validated(dto)?.into_new_dataset()
}

fn ticket_from_row(row: &CsvRow) -> Result<NewTicket, String> {
    check_required(row, &TICKET_REQUIRED)?;

    let dto = CreateTicketDto {
        title: text(row, "title").unwrap_or_default(),
        description: text(row, "description"),
        status: text(row, "status"),
        assigned_to: text(row, "assigned_to").unwrap_or_default(),
        current_stage: text(row, "current_stage"),
        priority: text(row, "priority"),
        category: text(row, "category"),
        created_at: timestamp(row, "created_at")?,
        resolved_at: timestamp(row, "resolved_at")?,
        time_in_stage_hours: decimal(row, "time_in_stage_hours")?,
    };

    validated(dto)?.into_new_ticket()
}

/// 全行を変換し、失敗した行を "Row N: message" として集める
///
/// N はヘッダー行を1行目としたスプレッドシート上の行番号。
pub fn convert_rows<T>(
    rows: &[CsvRow],
    convert: impl Fn(&CsvRow) -> Result<T, String>,
) -> AppResult<Vec<T>> {
    let mut converted = Vec::with_capacity(rows.len());
    let mut errors = Vec::new();

    for (idx, row) in rows.iter().enumerate() {
        match convert(row) {
            Ok(item) => converted.push(item),
            Err(message) => errors.push(format!("Row {}: {}", idx + 2, message)),
        }
    }

    if !errors.is_empty() {
        warn!(failed_rows = errors.len(), total_rows = rows.len(), "CSV import rejected");
        errors.truncate(MAX_REPORTED_ERRORS);
        return Err(AppError::ValidationErrors(errors));
    }

    Ok(converted)
}

pub fn parse_incidents(csv_text: &str) -> AppResult<Vec<NewIncident>> {
    convert_rows(&read_rows(csv_text)?, incident_from_row)
}

pub fn parse_datasets(csv_text: &str) -> AppResult<Vec<NewDataset>> {
    convert_rows(&read_rows(csv_text)?, dataset_from_row)
}

pub fn parse_tickets(csv_text: &str) -> AppResult<Vec<NewTicket>> {
    convert_rows(&read_rows(csv_text)?, ticket_from_row)
}

/// CSV取り込みサービス
pub struct ImportService {
    incident_repo: Arc<SecurityIncidentRepository>,
    dataset_repo: Arc<DatasetRepository>,
    ticket_repo: Arc<ItTicketRepository>,
}

impl ImportService {
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

    pub async fn import_incidents(&self, csv_text: &str) -> AppResult<usize> {
        let incidents = parse_incidents(csv_text)?;
        let ids = self.incident_repo.create_many(incidents).await?;
        info!(imported = ids.len(), "Incidents imported from CSV");
        Ok(ids.len())
    }

    pub async fn import_datasets(&self, csv_text: &str) -> AppResult<usize> {
        let datasets = parse_datasets(csv_text)?;
        let ids = self.dataset_repo.create_many(datasets).await?;
        info!(imported = ids.len(), "Datasets imported from CSV");
        Ok(ids.len())
    }

    pub async fn import_tickets(&self, csv_text: &str) -> AppResult<usize> {
        let tickets = parse_tickets(csv_text)?;
        let ids = self.ticket_repo.create_many(tickets).await?;
        info!(imported = ids.len(), "Tickets imported from CSV");
        Ok(ids.len())
    }
}
