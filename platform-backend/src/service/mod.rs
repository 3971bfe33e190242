// src/service/mod.rs
pub mod assistant_service;
pub mod auth_service;
pub mod dataset_service;
pub mod executive_service;
pub mod export_service;
pub mod import_service;
pub mod incident_service;
pub mod search_service;
pub mod session_service;
pub mod ticket_service;
