// platform-backend/src/domain/ticket_types.rs

use crate::domain::labels::labeled_enum;

labeled_enum! {
    /// チケットのステータス
    TicketStatus, "status" {
        Open => "Open",
        InProgress => "In Progress",
        Pending => "Pending",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

labeled_enum! {
    /// ワークフロー上のステージ（ステータスとは別管理）
    TicketStage, "stage" {
        New => "New",
        Triaged => "Triaged",
        InProgress => "In Progress",
        PendingReview => "Pending Review",
        Resolved => "Resolved",
    }
}

labeled_enum! {
    /// チケットの優先度
    TicketPriority, "priority" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labeled_enum! {
    /// チケットのカテゴリ
    TicketCategory, "category" {
        Hardware => "Hardware",
        Software => "Software",
        Network => "Network",
        Security => "Security",
        Database => "Database",
        Other => "Other",
    }
}

impl TicketStatus {
    /// 解決日時を記録する終了系ステータスか
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }
}

impl Default for TicketStatus {
    fn default() -> Self {
        Self::Open
    }
}

impl Default for TicketStage {
    fn default() -> Self {
        Self::New
    }
}

impl Default for TicketPriority {
    fn default() -> Self {
        Self::Medium
    }
}
