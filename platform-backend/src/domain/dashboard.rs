// platform-backend/src/domain/dashboard.rs

use crate::domain::labels::labeled_enum;

labeled_enum! {
    /// アクセス制御の単位となるダッシュボード
    Dashboard, "dashboard" {
        Executive => "executive",
        Security => "security" | "cybersecurity",
        Data => "data" | "data_science",
        ItOps => "it_ops" | "it_operations",
        Assistant => "assistant" | "ai_assistant",
    }
}

impl Dashboard {
    /// ナビゲーションに表示するタイトル
    pub fn title(&self) -> &'static str {
        match self {
            Dashboard::Executive => "Executive Overview",
            Dashboard::Security => "Cybersecurity",
            Dashboard::Data => "Data Science",
            Dashboard::ItOps => "IT Operations",
            Dashboard::Assistant => "AI Assistant",
        }
    }
}
