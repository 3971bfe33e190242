// src/utils/mod.rs

pub mod password;
pub mod time;
