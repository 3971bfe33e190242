// tests/unit/mod.rs
pub mod auth_service_tests;
pub mod repository_tests;
pub mod seeding_tests;
pub mod service_tests;
