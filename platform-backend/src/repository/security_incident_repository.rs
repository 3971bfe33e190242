// src/repository/security_incident_repository.rs

use crate::domain::incident_types::IncidentStatus;
use crate::domain::security_incident_model::{
    self, ActiveModel as IncidentActiveModel, Entity as IncidentEntity, NewIncident,
};
use chrono::Utc;
use sea_orm::entity::*;
use sea_orm::{DbConn, DbErr, QueryOrder, Set, TransactionTrait};

#[derive(Debug, Clone)]
pub struct SecurityIncidentRepository {
    db: DbConn,
}

impl SecurityIncidentRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    /// インシデントを登録し、採番されたIDを返す
    pub async fn create(&self, incident: NewIncident) -> Result<i32, DbErr> {
        let result = IncidentEntity::insert(Self::to_active_model(incident))
            .exec(&self.db)
            .await?;
        Ok(result.last_insert_id)
    }

    /// 複数件をまとめて登録（1件でも失敗したら全件ロールバック）
    pub async fn create_many(&self, items: Vec<NewIncident>) -> Result<Vec<i32>, DbErr> {
        let txn = self.db.begin().await?;
        let mut ids = Vec::with_capacity(items.len());

        for item in items {
            let result = IncidentEntity::insert(Self::to_active_model(item))
                .exec(&txn)
                .await?;
            ids.push(result.last_insert_id);
        }

        txn.commit().await?;
        Ok(ids)
    }

    /// 全インシデントを新しい順に取得
    pub async fn find_all(&self) -> Result<Vec<security_incident_model::Model>, DbErr> {
        IncidentEntity::find()
            .order_by_desc(security_incident_model::Column::CreatedAt)
            .order_by_desc(security_incident_model::Column::Id)
            .all(&self.db)
            .await
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<security_incident_model::Model>, DbErr> {
        IncidentEntity::find_by_id(id).one(&self.db).await
    }

    /// ステータスを更新
    ///
    /// 現在の行を読み、未設定の派生項目だけを算出して同じトランザクションで書き込む。
    /// 存在しないIDの場合は `Ok(false)`。
    pub async fn update_status(&self, id: i32, status: IncidentStatus) -> Result<bool, DbErr> {
        let txn = self.db.begin().await?;

        let Some(incident) = IncidentEntity::find_by_id(id).one(&txn).await? else {
            txn.rollback().await?;
            return Ok(false);
        };

        let change = incident.plan_status_update(status, Utc::now());

        let mut active_model: IncidentActiveModel = incident.into();
        active_model.status = Set(change.status.to_string());
        if let Some(resolved_at) = change.resolved_at {
            active_model.resolved_at = Set(Some(resolved_at));
        }
        if let Some(hours) = change.resolution_time_hours {
            active_model.resolution_time_hours = Set(Some(hours));
        }
        active_model.update(&txn).await?;

        txn.commit().await?;
        Ok(true)
    }

    /// インシデントを削除（存在しなければ `Ok(false)`）
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = IncidentEntity::delete_by_id(id).exec(&self.db).await?;
        Ok(result.rows_affected > 0)
    }

    fn to_active_model(incident: NewIncident) -> IncidentActiveModel {
        IncidentActiveModel {
            title: Set(incident.title),
            description: Set(incident.description),
            threat_type: Set(incident.threat_type.to_string()),
            severity: Set(incident.severity.to_string()),
            status: Set(incident.status.to_string()),
            created_at: Set(incident.created_at.unwrap_or_else(Utc::now)),
            resolved_at: Set(incident.resolved_at),
            resolution_time_hours: Set(incident.resolution_time_hours),
            assigned_to: Set(incident.assigned_to),
            ..Default::default()
        }
    }
}
