// src/config/mod.rs
pub mod app;

pub use app::{AppConfig, DatabaseConfig};

// Backward compatibility
pub type Config = AppConfig;
