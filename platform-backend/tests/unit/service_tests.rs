// tests/unit/service_tests.rs
use platform_backend::error::AppError;
use platform_backend::repository::{
    dataset_repository::DatasetRepository, it_ticket_repository::ItTicketRepository,
    security_incident_repository::SecurityIncidentRepository,
    statistics_repository::StatisticsRepository,
};
use platform_backend::service::{
    assistant_service::{AssistantService, Topic},
    executive_service::ExecutiveService,
    export_service::{ExportService, INCIDENT_COLUMNS},
    import_service::ImportService,
};
use sea_orm::ConnectionTrait;
use std::sync::Arc;

use crate::common::db::TestDatabase;
use crate::common::test_data::{create_test_dataset, create_test_incident, create_test_ticket};

struct Repos {
    incidents: Arc<SecurityIncidentRepository>,
    datasets: Arc<DatasetRepository>,
    tickets: Arc<ItTicketRepository>,
}

fn repos(db: &TestDatabase) -> Repos {
    Repos {
        incidents: Arc::new(SecurityIncidentRepository::new(db.connection.clone())),
        datasets: Arc::new(DatasetRepository::new(db.connection.clone())),
        tickets: Arc::new(ItTicketRepository::new(db.connection.clone())),
    }
}

fn import_service(repos: &Repos) -> ImportService {
    ImportService::new(
        repos.incidents.clone(),
        repos.datasets.clone(),
        repos.tickets.clone(),
    )
}

#[tokio::test]
async fn test_import_inserts_every_row() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);

    let csv = "name,source_department,size_mb,row_count,column_count,quality_score,sensitivity\n\
               sales_q1,Sales,10,100,5,8.5,Low\n\
               payroll,HR,2.5,40,12,,Confidential\n";
    let imported = import_service(&repos).import_datasets(csv).await.unwrap();

    assert_eq!(imported, 2);
    let datasets = repos.datasets.find_all().await.unwrap();
    assert_eq!(datasets.len(), 2);
    assert!(datasets
        .iter()
        .any(|d| d.name == "payroll" && d.quality_score.is_none()));
}

#[tokio::test]
async fn test_import_with_bad_row_inserts_nothing() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);

    let csv = "title,status,assigned_to,priority\n\
               Laptop broken,Open,helpdesk,High\n\
               Mystery,Open,helpdesk,Urgent\n";
    let result = import_service(&repos).import_tickets(csv).await;

    match result {
        Err(AppError::ValidationErrors(errors)) => {
            assert_eq!(errors.len(), 1);
            assert!(errors[0].starts_with("Row 3: Invalid priority"));
        }
        other => panic!("expected row errors, got {:?}", other),
    }
    assert!(repos.tickets.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_export_matches_store() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);
    let export = ExportService::new(
        repos.incidents.clone(),
        repos.datasets.clone(),
        repos.tickets.clone(),
    );

    let empty = export.export_incidents().await.unwrap();
    assert_eq!(empty.trim_end(), INCIDENT_COLUMNS.join(","));

    repos
        .incidents
        .create(create_test_incident("Fake invoice"))
        .await
        .unwrap();
    let csv = export.export_incidents().await.unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].contains("Fake invoice"));
    assert!(lines[1].contains("Phishing"));
}

#[tokio::test]
async fn test_executive_kpis_and_summary() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);
    let executive = ExecutiveService::new(
        Arc::new(StatisticsRepository::new(db.connection.clone())),
        repos.incidents.clone(),
        repos.datasets.clone(),
        repos.tickets.clone(),
    );

    let kpis = executive.get_kpis().await.unwrap();
    assert_eq!(kpis.security_posture, 85);
    assert_eq!(kpis.system_health, 92);
    assert_eq!(kpis.data_quality, 0.87);

    repos
        .datasets
        .create(create_test_dataset("a", Some(9.0)))
        .await
        .unwrap();
    repos.tickets.create(create_test_ticket("t")).await.unwrap();

    let kpis = executive.get_kpis().await.unwrap();
    assert_eq!(kpis.system_health, 0);
    assert!((kpis.data_quality - 0.9).abs() < 1e-9);

    let summary = executive.export_summary().await.unwrap();
    let lines: Vec<&str> = summary.lines().collect();
    assert_eq!(lines[0], "Category,Count,Export_Date");
    assert!(lines[1].starts_with("Cyber Incidents,0,"));
    assert!(lines[2].starts_with("Datasets,1,"));
    assert!(lines[3].starts_with("IT Tickets,1,"));
}

#[tokio::test]
async fn test_assistant_summary_follows_role() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);
    let assistant = AssistantService::new(
        repos.incidents.clone(),
        repos.datasets.clone(),
        repos.tickets.clone(),
    );

    repos
        .incidents
        .create(create_test_incident("Fake invoice"))
        .await
        .unwrap();

    let admin = assistant.summary("admin").await;
    assert_eq!(
        admin.incidents.as_deref(),
        Some("Found 1 incidents. Top threats: Phishing")
    );
    assert_eq!(admin.datasets.as_deref(), Some("No datasets"));
    assert_eq!(admin.tickets.as_deref(), Some("No tickets"));

    let data = assistant.summary("data_science").await;
    assert!(data.incidents.is_none());
    assert!(data.datasets.is_some());
    assert!(data.tickets.is_none());
}

#[tokio::test]
async fn test_assistant_degrades_on_read_fault() {
    let db = TestDatabase::new().await;
    let repos = repos(&db);
    let assistant = AssistantService::new(
        repos.incidents.clone(),
        repos.datasets.clone(),
        repos.tickets.clone(),
    );

    db.connection
        .execute_unprepared("DROP TABLE cyber_incidents")
        .await
        .unwrap();

    let summary = assistant.summary("security").await;
    assert_eq!(summary.incidents.as_deref(), Some("No incidents"));

    let answer = assistant
        .ask("security", "Analyse security incident patterns")
        .await;
    assert_eq!(answer.topic, Some(Topic::Incidents));
    assert_eq!(answer.answer, "No incidents");
}
