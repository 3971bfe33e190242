// src/domain/it_ticket_model.rs

use super::ticket_types::{TicketCategory, TicketPriority, TicketStage, TicketStatus};
use crate::utils::time::elapsed_hours;
use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "it_tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub status: String,
    pub assigned_to: String,
    pub current_stage: String,
    pub priority: String,
    pub category: Option<String>,
    pub created_at: DateTime<Utc>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub time_in_stage_hours: Option<f64>,
    pub stage_entered_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    fn new() -> Self {
        let now = Utc::now();
        Self {
            status: Set(TicketStatus::default().to_string()),
            current_stage: Set(TicketStage::default().to_string()),
            priority: Set(TicketPriority::default().to_string()),
            created_at: Set(now),
            stage_entered_at: Set(now),
            ..ActiveModelTrait::default()
        }
    }
}

/// チケット登録時の入力
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub title: String,
    pub description: Option<String>,
    pub status: TicketStatus,
    pub assigned_to: String,
    pub current_stage: TicketStage,
    pub priority: TicketPriority,
    pub category: Option<TicketCategory>,
    /// 以下は過去データの取り込み時のみ指定できる
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,
    pub time_in_stage_hours: Option<f64>,
}

/// ステータス・ステージ更新時に書き込む値（`None` は既存値を維持）
#[derive(Debug, Clone, PartialEq)]
pub struct TicketStatusChange {
    pub status: TicketStatus,
    pub current_stage: TicketStage,
    pub resolved_at: Option<DateTime<Utc>>,
    pub time_in_stage_hours: Option<f64>,
    pub stage_entered_at: Option<DateTime<Utc>>,
}

impl Model {
    /// ステータスとステージを同時に更新する際の書き込み値を決定する
    ///
    /// - Resolved / Closed への遷移で、未設定の場合のみ `resolved_at` を記録
    /// - 別ステージへ移る場合、直前のステージの滞在時間を記録して起点をリセット
    pub fn plan_status_update(
        &self,
        new_status: TicketStatus,
        new_stage: TicketStage,
        now: DateTime<Utc>,
    ) -> TicketStatusChange {
        let mut change = TicketStatusChange {
            status: new_status,
            current_stage: new_stage,
            resolved_at: None,
            time_in_stage_hours: None,
            stage_entered_at: None,
        };

        if new_status.is_terminal() && self.resolved_at.is_none() {
            change.resolved_at = Some(now);
        }

        if self.stage() != Some(new_stage) {
            change.time_in_stage_hours = Some(elapsed_hours(self.stage_entered_at, now));
            change.stage_entered_at = Some(now);
        }

        change
    }

    pub fn stage(&self) -> Option<TicketStage> {
        TicketStage::from_str(&self.current_stage)
    }
}
