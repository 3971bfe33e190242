// platform-backend/src/middleware/mod.rs

pub mod auth;
pub mod authorization;
