// src/repository/mod.rs
pub mod dataset_repository;
pub mod it_ticket_repository;
pub mod security_incident_repository;
pub mod statistics_repository;
pub mod user_repository;
