// src/domain/mod.rs
pub mod dashboard;
pub mod dataset_model;
pub mod dataset_types;
pub mod incident_types;
pub mod labels;
pub mod permission;
pub mod role_model;
pub mod security_incident_model;
pub mod it_ticket_model;
pub mod ticket_types;
pub mod user_model;
