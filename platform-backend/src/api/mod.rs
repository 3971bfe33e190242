// platform-backend/src/api/mod.rs
use crate::config::AppConfig;
use crate::db::DbPool;
use crate::repository::{
    dataset_repository::DatasetRepository, it_ticket_repository::ItTicketRepository,
    security_incident_repository::SecurityIncidentRepository,
    statistics_repository::StatisticsRepository, user_repository::UserRepository,
};
use crate::service::{
    assistant_service::AssistantService, auth_service::AuthService,
    dataset_service::DatasetService, executive_service::ExecutiveService,
    export_service::ExportService, import_service::ImportService,
    incident_service::IncidentService, session_service::SessionRegistry,
    ticket_service::TicketService,
};
use crate::utils::password::PasswordManager;
use std::sync::Arc;

pub mod dto;
pub mod handlers;

/// 全ハンドラーで共有するアプリケーション状態
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub incident_service: Arc<IncidentService>,
    pub dataset_service: Arc<DatasetService>,
    pub ticket_service: Arc<TicketService>,
    pub executive_service: Arc<ExecutiveService>,
    pub import_service: Arc<ImportService>,
    pub export_service: Arc<ExportService>,
    pub assistant_service: Arc<AssistantService>,
    pub sessions: Arc<SessionRegistry>,
    pub db: Arc<DbPool>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// DB接続からリポジトリとサービスを組み立てる
    pub fn new(db: DbPool, password_manager: Arc<PasswordManager>, app_config: &AppConfig) -> Self {
        let user_repo = Arc::new(UserRepository::new(db.clone()));
        let incident_repo = Arc::new(SecurityIncidentRepository::new(db.clone()));
        let dataset_repo = Arc::new(DatasetRepository::new(db.clone()));
        let ticket_repo = Arc::new(ItTicketRepository::new(db.clone()));
        let statistics_repo = Arc::new(StatisticsRepository::new(db.clone()));

        Self {
            auth_service: Arc::new(AuthService::new(user_repo, password_manager)),
            incident_service: Arc::new(IncidentService::new(incident_repo.clone())),
            dataset_service: Arc::new(DatasetService::new(dataset_repo.clone())),
            ticket_service: Arc::new(TicketService::new(ticket_repo.clone())),
            executive_service: Arc::new(ExecutiveService::new(
                statistics_repo,
                incident_repo.clone(),
                dataset_repo.clone(),
                ticket_repo.clone(),
            )),
            import_service: Arc::new(ImportService::new(
                incident_repo.clone(),
                dataset_repo.clone(),
                ticket_repo.clone(),
            )),
            export_service: Arc::new(ExportService::new(
                incident_repo.clone(),
                dataset_repo.clone(),
                ticket_repo.clone(),
            )),
            assistant_service: Arc::new(AssistantService::new(
                incident_repo,
                dataset_repo,
                ticket_repo,
            )),
            sessions: Arc::new(SessionRegistry::new()),
            db: Arc::new(db),
            config: Arc::new(app_config.clone()),
        }
    }
}

/// セッションレジストリを提供するトレイト
pub trait HasSessionRegistry {
    fn sessions(&self) -> &Arc<SessionRegistry>;
}

impl HasSessionRegistry for AppState {
    fn sessions(&self) -> &Arc<SessionRegistry> {
        &self.sessions
    }
}
