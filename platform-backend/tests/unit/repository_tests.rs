// tests/unit/repository_tests.rs
use chrono::{Duration, Utc};
use platform_backend::domain::incident_types::IncidentStatus;
use platform_backend::domain::ticket_types::{TicketStage, TicketStatus};
use platform_backend::repository::{
    dataset_repository::DatasetRepository, it_ticket_repository::ItTicketRepository,
    security_incident_repository::SecurityIncidentRepository,
    statistics_repository::StatisticsRepository,
};

use crate::common::db::TestDatabase;
use crate::common::test_data::{create_test_dataset, create_test_incident, create_test_ticket};

#[tokio::test]
async fn test_create_and_find_incident() {
    let db = TestDatabase::new().await;
    let repo = SecurityIncidentRepository::new(db.connection.clone());

    let id = repo.create(create_test_incident("Fake invoice")).await.unwrap();
    let incident = repo.find_by_id(id).await.unwrap().unwrap();

    assert_eq!(incident.title, "Fake invoice");
    assert_eq!(incident.threat_type, "Phishing");
    assert_eq!(incident.status, "Open");
    assert!(incident.resolved_at.is_none());
    assert!(incident.resolution_time_hours.is_none());
}

#[tokio::test]
async fn test_find_all_newest_first() {
    let db = TestDatabase::new().await;
    let repo = SecurityIncidentRepository::new(db.connection.clone());

    let mut older = create_test_incident("older");
    older.created_at = Some(Utc::now() - Duration::days(2));
    repo.create(older).await.unwrap();
    repo.create(create_test_incident("newer")).await.unwrap();

    let titles: Vec<String> = repo
        .find_all()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.title)
        .collect();
    assert_eq!(titles, vec!["newer", "older"]);
}

#[tokio::test]
async fn test_resolution_time_is_set_once() {
    let db = TestDatabase::new().await;
    let repo = SecurityIncidentRepository::new(db.connection.clone());

    let mut incident = create_test_incident("Ransom note");
    incident.created_at = Some(Utc::now() - Duration::hours(5));
    let id = repo.create(incident).await.unwrap();

    assert!(repo.update_status(id, IncidentStatus::Resolved).await.unwrap());
    let first = repo.find_by_id(id).await.unwrap().unwrap();
    let hours = first.resolution_time_hours.unwrap();
    assert!((4.9..5.1).contains(&hours), "unexpected hours: {}", hours);
    assert!(first.resolved_at.is_some());

    // 再オープンして再度解決しても最初の値が残る
    assert!(repo.update_status(id, IncidentStatus::Open).await.unwrap());
    assert!(repo.update_status(id, IncidentStatus::Resolved).await.unwrap());
    let second = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(second.resolution_time_hours, first.resolution_time_hours);
    assert_eq!(second.resolved_at, first.resolved_at);
    assert_eq!(second.status, "Resolved");
}

#[tokio::test]
async fn test_unknown_ids_report_false() {
    let db = TestDatabase::new().await;
    let incidents = SecurityIncidentRepository::new(db.connection.clone());
    let datasets = DatasetRepository::new(db.connection.clone());
    let tickets = ItTicketRepository::new(db.connection.clone());

    assert!(!incidents.update_status(999, IncidentStatus::Closed).await.unwrap());
    assert!(!incidents.delete(999).await.unwrap());
    assert!(!datasets.update_quality(999, 5.0).await.unwrap());
    assert!(!datasets.delete(999).await.unwrap());
    assert!(!tickets
        .update_status(999, TicketStatus::Closed, TicketStage::Resolved)
        .await
        .unwrap());
    assert!(!tickets.delete(999).await.unwrap());
    assert!(incidents.find_by_id(999).await.unwrap().is_none());
}

#[tokio::test]
async fn test_delete_removes_row() {
    let db = TestDatabase::new().await;
    let repo = ItTicketRepository::new(db.connection.clone());

    let id = repo.create(create_test_ticket("VPN down")).await.unwrap();
    assert!(repo.delete(id).await.unwrap());
    assert!(repo.find_by_id(id).await.unwrap().is_none());
    assert!(!repo.delete(id).await.unwrap());
}

#[tokio::test]
async fn test_update_quality_touches_last_accessed() {
    let db = TestDatabase::new().await;
    let repo = DatasetRepository::new(db.connection.clone());

    let id = repo.create(create_test_dataset("crm_export", None)).await.unwrap();
    assert!(repo.find_by_id(id).await.unwrap().unwrap().last_accessed.is_none());

    assert!(repo.update_quality(id, 7.5).await.unwrap());
    let dataset = repo.find_by_id(id).await.unwrap().unwrap();
    assert_eq!(dataset.quality_score, Some(7.5));
    assert!(dataset.last_accessed.is_some());
}

#[tokio::test]
async fn test_ticket_stage_timing() {
    let db = TestDatabase::new().await;
    let repo = ItTicketRepository::new(db.connection.clone());

    let mut ticket = create_test_ticket("Printer jam");
    ticket.created_at = Some(Utc::now() - Duration::hours(3));
    let id = repo.create(ticket).await.unwrap();

    // 同じステージのままなら滞在時間は記録しない
    assert!(repo
        .update_status(id, TicketStatus::InProgress, TicketStage::New)
        .await
        .unwrap());
    let same_stage = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(same_stage.time_in_stage_hours.is_none());

    assert!(repo
        .update_status(id, TicketStatus::InProgress, TicketStage::Triaged)
        .await
        .unwrap());
    let moved = repo.find_by_id(id).await.unwrap().unwrap();
    let hours = moved.time_in_stage_hours.unwrap();
    assert!((2.9..3.1).contains(&hours), "unexpected hours: {}", hours);
    assert_eq!(moved.current_stage, "Triaged");
    assert!(moved.stage_entered_at > moved.created_at);
    assert!(moved.resolved_at.is_none());

    assert!(repo
        .update_status(id, TicketStatus::Closed, TicketStage::Resolved)
        .await
        .unwrap());
    let closed = repo.find_by_id(id).await.unwrap().unwrap();
    assert!(closed.resolved_at.is_some());
}

#[tokio::test]
async fn test_create_many_inserts_every_row() {
    let db = TestDatabase::new().await;
    let repo = DatasetRepository::new(db.connection.clone());

    let ids = repo
        .create_many(vec![
            create_test_dataset("a", Some(8.0)),
            create_test_dataset("b", None),
        ])
        .await
        .unwrap();
    assert_eq!(ids.len(), 2);
    assert_eq!(repo.find_all().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_create_many_rolls_back_on_failure() {
    let db = TestDatabase::new().await;
    let repo = DatasetRepository::new(db.connection.clone());

    // SQLite は NaN を NULL として扱うため NOT NULL 制約で2件目が失敗する
    let mut broken = create_test_dataset("broken", None);
    broken.size_mb = f64::NAN;

    let result = repo
        .create_many(vec![create_test_dataset("valid", Some(7.0)), broken])
        .await;

    assert!(result.is_err());
    assert!(repo.find_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_statistics() {
    let db = TestDatabase::seeded().await;
    let incidents = SecurityIncidentRepository::new(db.connection.clone());
    let datasets = DatasetRepository::new(db.connection.clone());
    let tickets = ItTicketRepository::new(db.connection.clone());

    let mut critical = create_test_incident("critical");
    critical.severity = platform_backend::domain::incident_types::Severity::Critical;
    incidents.create(critical).await.unwrap();
    let resolved = incidents.create(create_test_incident("high")).await.unwrap();
    incidents
        .update_status(resolved, IncidentStatus::Resolved)
        .await
        .unwrap();

    datasets.create(create_test_dataset("a", Some(8.0))).await.unwrap();
    datasets.create(create_test_dataset("b", None)).await.unwrap();
    datasets.create(create_test_dataset("c", Some(6.0))).await.unwrap();

    tickets.create(create_test_ticket("t1")).await.unwrap();

    let stats = StatisticsRepository::new(db.connection.clone())
        .get_statistics()
        .await
        .unwrap();

    assert_eq!(stats.user_count, 4);
    assert_eq!(stats.total_incidents, 2);
    assert_eq!(stats.open_incidents, 1);
    assert_eq!(stats.critical_incidents, 2);
    assert_eq!(stats.total_datasets, 3);
    assert!((stats.avg_quality - 7.0).abs() < 1e-9);
    assert!((stats.total_data_size_mb - 37.5).abs() < 1e-9);
    assert_eq!(stats.total_tickets, 1);
    assert_eq!(stats.open_tickets, 1);
}
