// src/service/ticket_service.rs
use crate::api::dto::ticket_dto::{CreateTicketDto, TicketFilterQuery};
use crate::domain::it_ticket_model::{Model as TicketModel, NewTicket};
use crate::domain::ticket_types::{TicketStage, TicketStatus};
use crate::error::{AppError, AppResult};
use crate::repository::it_ticket_repository::ItTicketRepository;
use crate::service::incident_service::NO_SUCH_RECORD;
use crate::service::search_service;
use std::sync::Arc;
use tracing::info;
use validator::Validate;

pub struct TicketService {
    repo: Arc<ItTicketRepository>,
}

impl TicketService {
    pub fn new(repo: Arc<ItTicketRepository>) -> Self {
        Self { repo }
    }

    pub async fn create_ticket(&self, payload: CreateTicketDto) -> AppResult<i32> {
        payload.validate()?;
        let ticket = payload
            .into_new_ticket()
            .map_err(AppError::ValidationError)?;
        self.create_validated(ticket).await
    }

    async fn create_validated(&self, ticket: NewTicket) -> AppResult<i32> {
        let priority = ticket.priority;
        let id = self.repo.create(ticket).await?;
        info!(ticket_id = id, priority = %priority, "Ticket created");
        Ok(id)
    }

    pub async fn search_tickets(&self, query: &TicketFilterQuery) -> AppResult<Vec<TicketModel>> {
        let tickets = self.repo.find_all().await?;
        Ok(search_service::filter_tickets(tickets, query))
    }

    pub async fn get_ticket(&self, id: i32) -> AppResult<TicketModel> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(NO_SUCH_RECORD.to_string()))
    }

    /// ステータスとステージを同時に更新
    pub async fn update_status(&self, id: i32, status: &str, stage: &str) -> AppResult<TicketModel> {
        let status: TicketStatus = status.parse().map_err(AppError::ValidationError)?;
        let stage: TicketStage = stage.parse().map_err(AppError::ValidationError)?;

        if !self.repo.update_status(id, status, stage).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }

        info!(ticket_id = id, status = %status, stage = %stage, "Ticket status updated");
        self.get_ticket(id).await
    }

    pub async fn delete_ticket(&self, id: i32) -> AppResult<()> {
        if !self.repo.delete(id).await? {
            return Err(AppError::NotFound(NO_SUCH_RECORD.to_string()));
        }
        info!(ticket_id = id, "Ticket deleted");
        Ok(())
    }
}
