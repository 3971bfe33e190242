// tests/common/test_data.rs

use platform_backend::domain::dataset_model::NewDataset;
use platform_backend::domain::dataset_types::{Department, Sensitivity};
use platform_backend::domain::incident_types::{IncidentStatus, Severity, ThreatType};
use platform_backend::domain::it_ticket_model::NewTicket;
use platform_backend::domain::security_incident_model::NewIncident;
use platform_backend::domain::ticket_types::{TicketPriority, TicketStage, TicketStatus};

pub fn create_test_incident(title: &str) -> NewIncident {
    NewIncident {
        title: title.to_string(),
        description: Some("Detected by mail gateway".to_string()),
        threat_type: ThreatType::Phishing,
        severity: Severity::High,
        status: IncidentStatus::Open,
        assigned_to: Some("soc".to_string()),
        created_at: None,
        resolved_at: None,
        resolution_time_hours: None,
    }
}

pub fn create_test_dataset(name: &str, quality_score: Option<f64>) -> NewDataset {
    NewDataset {
        name: name.to_string(),
        source_department: Department::Sales,
        size_mb: 12.5,
        row_count: 1_000,
        column_count: 8,
        quality_score,
        sensitivity: Some(Sensitivity::Medium),
        last_accessed: None,
        created_at: None,
    }
}

pub fn create_test_ticket(title: &str) -> NewTicket {
    NewTicket {
        title: title.to_string(),
        description: None,
        status: TicketStatus::Open,
        assigned_to: "helpdesk".to_string(),
        current_stage: TicketStage::New,
        priority: TicketPriority::Medium,
        category: None,
        created_at: None,
        resolved_at: None,
        time_in_stage_hours: None,
    }
}
