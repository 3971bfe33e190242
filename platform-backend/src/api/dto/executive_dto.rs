// src/api/dto/executive_dto.rs

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

/// `/executive/export/{kind}` で指定できる出力種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportKind {
    Summary,
    Incidents,
    Datasets,
    Tickets,
}

impl ExportKind {
    /// ダウンロード時のファイル名
    pub fn file_name(&self) -> &'static str {
        match self {
            ExportKind::Summary => "executive_summary.csv",
            ExportKind::Incidents => "cyber_incidents.csv",
            ExportKind::Datasets => "datasets_metadata.csv",
            ExportKind::Tickets => "it_tickets.csv",
        }
    }
}

impl FromStr for ExportKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "summary" => Ok(ExportKind::Summary),
            "incidents" => Ok(ExportKind::Incidents),
            "datasets" => Ok(ExportKind::Datasets),
            "tickets" => Ok(ExportKind::Tickets),
            other => Err(format!(
                "Invalid export kind: '{}'. Must be one of: summary, incidents, datasets, tickets",
                other
            )),
        }
    }
}

/// アシスタントへの質問
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct AskRequest {
    #[validate(length(min = 1, max = 1000, message = "Question must be between 1 and 1000 characters"))]
    pub question: String,
}
