// src/api/dto/ticket_dto.rs

use super::{non_blank, parse_optional, parse_or_default, require};
use crate::domain::it_ticket_model::NewTicket;
use crate::domain::ticket_types::{TicketPriority, TicketStage, TicketStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

// --- Request DTOs ---

#[derive(Deserialize, Serialize, Debug, Clone, Default, Validate)]
pub struct CreateTicketDto {
    #[validate(length(max = 200, message = "Title must not exceed 200 characters"))]
    pub title: String,

    #[validate(length(max = 2000, message = "Description must not exceed 2000 characters"))]
    pub description: Option<String>,

    pub status: Option<String>,
    pub assigned_to: String,
    pub current_stage: Option<String>,
    pub priority: Option<String>,
    pub category: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
    pub resolved_at: Option<DateTime<Utc>>,

    #[validate(range(min = 0.0, message = "time_in_stage_hours must not be negative"))]
    pub time_in_stage_hours: Option<f64>,
}

impl CreateTicketDto {
    /// 必須項目と列挙値を検証して登録用の値に変換
    pub fn into_new_ticket(self) -> Result<NewTicket, String> {
        require(&self.title, "title")?;
        require(&self.assigned_to, "assigned_to")?;

        Ok(NewTicket {
            title: self.title.trim().to_string(),
            description: non_blank(self.description),
            status: parse_or_default::<TicketStatus>(self.status)?,
            assigned_to: self.assigned_to.trim().to_string(),
            current_stage: parse_or_default::<TicketStage>(self.current_stage)?,
            priority: parse_or_default::<TicketPriority>(self.priority)?,
            category: parse_optional(self.category)?,
            created_at: self.created_at,
            resolved_at: self.resolved_at,
            time_in_stage_hours: self.time_in_stage_hours,
        })
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct UpdateTicketStatusDto {
    pub status: String,
    pub current_stage: String,
}

/// 一覧の検索条件
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct TicketFilterQuery {
    pub search: Option<String>,
    pub category: Option<String>,
    pub priority: Option<String>,
    pub status: Option<String>,
    pub assigned_to: Option<String>,
}
