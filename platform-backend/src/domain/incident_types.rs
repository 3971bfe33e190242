// platform-backend/src/domain/incident_types.rs

use crate::domain::labels::labeled_enum;

labeled_enum! {
    /// 脅威の種類
    ThreatType, "threat type" {
        Phishing => "Phishing",
        Malware => "Malware",
        DDoS => "DDoS",
        BruteForce => "Brute Force",
        DataBreach => "Data Breach",
        InsiderThreat => "Insider Threat",
    }
}

labeled_enum! {
    /// インシデントの重要度
    Severity, "severity" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labeled_enum! {
    /// インシデントのステータス
    IncidentStatus, "status" {
        Open => "Open",
        InProgress => "In Progress",
        Resolved => "Resolved",
        Closed => "Closed",
    }
}

impl Severity {
    /// エグゼクティブ向けの「重大」集計に含めるか
    pub fn is_critical_or_high(&self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl IncidentStatus {
    /// 解決時間の算出対象となるステータスか
    pub fn is_resolved(&self) -> bool {
        matches!(self, Self::Resolved)
    }
}

impl Default for IncidentStatus {
    fn default() -> Self {
        Self::Open
    }
}
