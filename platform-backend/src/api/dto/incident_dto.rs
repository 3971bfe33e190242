// src/api/dto/incident_dto.rs

use super::{non_blank, parse_or_default, require};
use crate::domain::incident_types::{IncidentStatus, Severity, ThreatType};
use crate::domain::security_incident_model::NewIncident;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct CreateIncidentDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    pub threat_type: String,
    pub severity: String,
    pub status: Option<String>, // 省略時は Open
    pub assigned_to: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "Resolution time must not be negative"))]
    pub resolution_time_hours: Option<f64>,
}

impl CreateIncidentDto {
    /// 必須項目と列挙値を検証して登録用の値に変換
    pub fn into_new_incident(self) -> Result<NewIncident, String> {
        require(&self.title, "title")?;
        require(&self.threat_type, "threat_type")?;
        require(&self.severity, "severity")?;

        Ok(NewIncident {
            title: self.title.trim().to_string(),
            description: non_blank(self.description),
            threat_type: self.threat_type.parse::<ThreatType>()?,
            severity: self.severity.parse::<Severity>()?,
            status: parse_or_default::<IncidentStatus>(self.status)?,
            assigned_to: non_blank(self.assigned_to),
            created_at: self.created_at,
            resolved_at: self.resolved_at,
            resolution_time_hours: self.resolution_time_hours,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateIncidentStatusDto {
    pub status: String,
}

/// 一覧の検索条件（空文字は「すべて」）
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct IncidentFilterQuery {
    pub search: Option<String>,
    pub threat_type: Option<String>,
    pub severity: Option<String>,
    pub status: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
}
