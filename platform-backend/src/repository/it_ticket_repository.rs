// src/repository/it_ticket_repository.rs

use crate::domain::it_ticket_model::{
    self, ActiveModel as TicketActiveModel, Entity as TicketEntity, NewTicket,
};
use crate::domain::ticket_types::{TicketStage, TicketStatus};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryOrder, Set, TransactionTrait};

#[derive(Debug, Clone)]
pub struct ItTicketRepository {
    db: DbConn,
}

impl ItTicketRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// チケットを登録し、採番されたIDを返す
    pub async fn create(&self, ticket: NewTicket) -> Result<i32, DbErr> {
        let result = TicketEntity::insert(Self::to_active_model(ticket))
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id)
    }

    /// 複数件をまとめて登録（1件でも失敗したら全件ロールバック）
    pub async fn create_many(&self, items: Vec<NewTicket>) -> Result<Vec<i32>, DbErr> {
        let txn = self.db.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for item in items {
            let result = TicketEntity::insert(Self::to_active_model(item))
                .exec(&txn)
                .await?;
            ids.push(result.last_insert_id);
        }

        txn.commit().await?;
        Ok(ids)
    }

    /// 全チケットを新しい順に取得
    pub async fn find_all(&self) -> Result<Vec<it_ticket_model::Model>, DbErr> {
        TicketEntity::find()
            .order_by_desc(it_ticket_model::Column::CreatedAt)
            .order_by_desc(it_ticket_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<it_ticket_model::Model>, DbErr> {
        TicketEntity::find_by_id(id).one(&self.db).await
    }

    /// ステータスとステージを同時に更新
    ///
    /// 存在しないIDの場合は `Ok(false)`。
    pub async fn update_status(
        &self,
        id: i32,
        status: TicketStatus,
        stage: TicketStage,
    ) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(ticket) = TicketEntity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        let change = ticket.plan_status_update(status, stage, Utc::now());

        let mut active_model: TicketActiveModel = ticket.into();
        active_model.status = Set(change.status.to_string());
        active_model.current_stage = Set(change.current_stage.to_string());
        if let Some(resolved_at) = change.resolved_at {
            active_model.resolved_at = Set(Some(resolved_at));
        }
        if let Some(hours) = change.time_in_stage_hours {
            active_model.time_in_stage_hours = Set(Some(hours));
        }
        if let Some(entered_at) = change.stage_entered_at {
            active_model.stage_entered_at = Set(entered_at);
        }
        active_model.update(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }

    /// チケットを削除（存在しなければ `Ok(false)`）
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = TicketEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    fn to_active_model(ticket: NewTicket) -> TicketActiveModel {
        let created_at = ticket.created_at.unwrap_or_else(Utc::now);

        TicketActiveModel {
            title: Set(ticket.title),
            description: Set(ticket.description),
            status: Set(ticket.status.to_string()),
            assigned_to: Set(ticket.assigned_to),
            current_stage: Set(ticket.current_stage.to_string()),
            priority: Set(ticket.priority.to_string()),
            category: Set(ticket.category.map(String::from)),
            created_at: Set(created_at),
            resolved_at: Set(ticket.resolved_at),
            time_in_stage_hours: Set(ticket.time_in_stage_hours),
            stage_entered_at: Set(created_at),
            ..Default::default()
        }
    }
}
