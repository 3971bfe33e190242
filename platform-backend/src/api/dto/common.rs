// src/api/dto/common.rs

use serde::{Deserialize, Serialize};

/// 登録結果（採番されたID）
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatedResponse {
    pub id: i32,
}

/// CSV取り込み結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportResponse {
    pub imported: usize,
}

/// 更新・削除などの操作結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperationResult {
    pub id: i32,
    pub message: String,
}

impl OperationResult {
    pub fn new(id: i32, message: impl Into<String>) -> Self {
        Self {
            id,
            message: message.into(),
        }
    }
}
