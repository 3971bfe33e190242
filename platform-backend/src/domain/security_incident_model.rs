// src/domain/security_incident_model.rs

use super::incident_types::{IncidentStatus, Severity, ThreatType};
use crate::utils::time::elapsed_hours;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cyber_incidents")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub threat_type: String,
    pub severity: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_time_hours: Option<f64>,
    pub assigned_to: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        Self {
            status: Set(IncidentStatus::default().to_string()),
            created_at: Set(Utc::now()),
            ..ActiveModelTrait::default()
        }
    }
}

/// インシデント登録時の入力（列挙値は検証済み）
#[derive(Debug, Clone, PartialEq)]
pub struct NewIncident {
    pub title: String,
    pub description: Option<String>,
    pub threat_type: ThreatType,
    pub severity: Severity,
    pub status: IncidentStatus,
    pub assigned_to: Option<String>,
    /// 過去データの取り込み時のみ指定。省略時は登録時刻
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_time_hours: Option<f64>,
}

/// ステータス更新時に書き込む値
///
/// `None` の項目は既存の値を維持する。
#[derive(Debug, Clone, PartialEq)]
pub struct IncidentStatusChange {
    pub status: IncidentStatus,
    pub resolved_at: Option<DateTime<Utc>>,
    pub resolution_time_hours: Option<f64>,
}

impl Model {
    /// ステータス更新で書き込む値を決定する
    ///
    /// 解決時刻と解決時間は初回の Resolved 遷移でのみ設定され、
    /// 再オープン後に再度解決しても上書きされない。
    pub fn plan_status_update(
        &self,
        new_status: IncidentStatus,
        now: DateTime<Utc>,
    ) -> IncidentStatusChange {
        let mut change = IncidentStatusChange {
            status: new_status,
            resolved_at: None,
            resolution_time_hours: None,
        };

        if new_status.is_resolved() {
            if self.resolved_at.is_none() {
                change.resolved_at = Some(now);
            }
            if self.resolution_time_hours.is_none() {
                change.resolution_time_hours = Some(elapsed_hours(self.created_at, now));
            }
        }

        change
    }
}
