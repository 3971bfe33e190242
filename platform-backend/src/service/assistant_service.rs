// src/service/assistant_service.rs

//! AIアシスタント（読み取り専用）
//!
//! 外部の文章生成サービスは呼ばず、レコードの集計から要約と
//! 質問ごとのコンテキストを組み立てる。読み取りに失敗しても
//! リクエストは失敗させず「データなし」として扱う。

use crate::domain::dashboard::Dashboard;
use crate::domain::incident_types::{IncidentStatus, Severity};
use crate::domain::permission::allowed_dashboards;
use crate::domain::ticket_types::TicketStatus;
use crate::domain::{dataset_model, it_ticket_model, security_incident_model};
use crate::repository::dataset_repository::DatasetRepository;
use crate::repository::it_ticket_repository::ItTicketRepository;
use crate::repository::security_incident_repository::SecurityIncidentRepository;
use crate::repository::statistics_repository::mean;
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::warn;

const SECURITY_KEYWORDS: [&str; 7] = [
    "security", "incident", "threat", "cyber", "breach", "malware", "phishing",
];
const DATA_KEYWORDS: [&str; 5] = ["data", "dataset", "quality", "analytics", "database"];
const TICKET_KEYWORDS: [&str; 6] = ["ticket", "it", "support", "server", "network", "system"];

const SECURITY_QUESTIONS: [&str; 6] = [
    "What are the most critical security incidents?",
    "Which threat types are most common?",
    "Analyse security incident patterns",
    "What security recommendations do you have?",
    "How many incidents are still open?",
    "What's the average resolution time?",
];
const DATA_QUESTIONS: [&str; 6] = [
    "What's the overall data quality score?",
    "Which datasets need improvement?",
    "Analyse data quality trends",
    "What data governance recommendations?",
    "Which departments have best data quality?",
    "What's the total data size?",
];
const IT_QUESTIONS: [&str; 6] = [
    "What IT tickets need attention?",
    "What's the average ticket resolution time?",
    "Analyse IT ticket patterns",
    "Which categories have most tickets?",
    "What IT recommendations do you have?",
    "How many tickets are still open?",
];
const GENERAL_QUESTIONS: [&str; 3] = [
    "Give me a system health summary",
    "What are the top priorities?",
    "Any overall recommendations?",
];

/// 質問の話題（対応するダッシュボードへのアクセス権が必要）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Topic {
    Incidents,
    Datasets,
    Tickets,
}

impl Topic {
    pub fn dashboard(&self) -> Dashboard {
        match self {
            Topic::Incidents => Dashboard::Security,
            Topic::Datasets => Dashboard::Data,
            Topic::Tickets => Dashboard::ItOps,
        }
    }

    fn keywords(&self) -> &'static [&'static str] {
        match self {
            Topic::Incidents => &SECURITY_KEYWORDS,
            Topic::Datasets => &DATA_KEYWORDS,
            Topic::Tickets => &TICKET_KEYWORDS,
        }
    }
}

/// ロールが閲覧できる範囲の要約
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AssistantSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incidents: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub datasets: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tickets: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssistantAnswer {
    pub question: String,
    pub topic: Option<Topic>,
    pub context: String,
    pub answer: String,
}

/// 出現回数の多い順（同数はラベル順）に上位n件
pub fn top_counts<'a>(values: impl IntoIterator<Item = &'a str>, n: usize) -> Vec<(String, usize)> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }

    let mut counted: Vec<(String, usize)> = counts
        .into_iter()
        .map(|(label, count)| (label.to_string(), count))
        .collect();
    counted.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    counted.truncate(n);
    counted
}

fn format_counts(counts: &[(String, usize)]) -> String {
    counts
        .iter()
        .map(|(label, count)| format!("{}({})", label, count))
        .collect::<Vec<_>>()
        .join(", ")
}

fn quality_scores(datasets: &[dataset_model::Model]) -> Vec<f64> {
    datasets.iter().filter_map(|d| d.quality_score).collect()
}

pub fn incident_summary(incidents: &[security_incident_model::Model]) -> String {
    if incidents.is_empty() {
        return "No incidents".to_string();
    }
    let top: Vec<String> = top_counts(incidents.iter().map(|i| i.threat_type.as_str()), 2)
        .into_iter()
        .map(|(label, _)| label)
        .collect();
    format!("Found {} incidents. Top threats: {}", incidents.len(), top.join(", "))
}

pub fn dataset_summary(datasets: &[dataset_model::Model]) -> String {
    if datasets.is_empty() {
        return "No datasets".to_string();
    }
    format!(
        "Found {} datasets. Avg quality: {:.1}/10",
        datasets.len(),
        mean(&quality_scores(datasets))
    )
}

pub fn ticket_summary(tickets: &[it_ticket_model::Model]) -> String {
    if tickets.is_empty() {
        return "No tickets".to_string();
    }
    let open = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Open.as_str())
        .count();
    let top = top_counts(tickets.iter().map(|t| t.priority.as_str()), 3);
    format!(
        "Found {} tickets. Open: {}. Priorities: {}",
        tickets.len(),
        open,
        format_counts(&top)
    )
}

/// 質問文を単語に分け、許可された話題のうち最初に一致したものを返す
pub fn detect_topic(question: &str, allowed: &[Dashboard]) -> Option<Topic> {
    let lowered = question.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    [Topic::Incidents, Topic::Datasets, Topic::Tickets]
        .into_iter()
        .filter(|topic| allowed.contains(&topic.dashboard()))
        .find(|topic| topic.keywords().iter().any(|k| words.contains(k)))
}

/// ロールに応じた質問候補（汎用の質問は常に含む）
pub fn suggested_questions(role: &str) -> Vec<&'static str> {
    let allowed = allowed_dashboards(role);
    let mut questions = Vec::new();
    if allowed.contains(&Dashboard::Security) {
        questions.extend(SECURITY_QUESTIONS);
    }
    if allowed.contains(&Dashboard::Data) {
        questions.extend(DATA_QUESTIONS);
    }
    if allowed.contains(&Dashboard::ItOps) {
        questions.extend(IT_QUESTIONS);
    }
    questions.extend(GENERAL_QUESTIONS);
    questions
}

pub fn incident_context(incidents: &[security_incident_model::Model]) -> String {
    if incidents.is_empty() {
        return String::new();
    }
    let open = incidents
        .iter()
        .filter(|i| i.status == IncidentStatus::Open.as_str())
        .count();
    let critical = incidents
        .iter()
        .filter(|i| i.severity == Severity::Critical.as_str())
        .count();
    let threats = top_counts(incidents.iter().map(|i| i.threat_type.as_str()), 3);

    let mut context = format!(
        "Current Security Incidents Data:\n\
         Total incidents: {}\n\
         Open incidents: {}\n\
         Critical incidents: {}\n\
         Top threat types: {}\n\
         \nRecent incidents:\n",
        incidents.len(),
        open,
        critical,
        format_counts(&threats)
    );
    for incident in incidents.iter().take(5) {
        context.push_str(&format!(
            "- {}: {} - {}\n",
            incident.title, incident.severity, incident.status
        ));
    }
    context
}

pub fn dataset_context(datasets: &[dataset_model::Model]) -> String {
    if datasets.is_empty() {
        return String::new();
    }
    let scores = quality_scores(datasets);
    let total_size: f64 = datasets.iter().map(|d| d.size_mb).sum();
    let departments = top_counts(datasets.iter().map(|d| d.source_department.as_str()), 3);

    let mut context = format!("Current Datasets Data:\nTotal datasets: {}\n", datasets.len());
    if !scores.is_empty() {
        context.push_str(&format!("Average quality score: {:.1}/10\n", mean(&scores)));
    }
    context.push_str(&format!(
        "Total data size: {:.1} MB\nTop departments: {}\n\nRecent datasets:\n",
        total_size,
        format_counts(&departments)
    ));
    for dataset in datasets.iter().take(5) {
        let score = dataset
            .quality_score
            .map_or_else(|| "N/A".to_string(), |s| s.to_string());
        context.push_str(&format!("- {}: Quality {}/10\n", dataset.name, score));
    }
    context
}

pub fn ticket_context(tickets: &[it_ticket_model::Model]) -> String {
    if tickets.is_empty() {
        return String::new();
    }
    let open = tickets
        .iter()
        .filter(|t| t.status == TicketStatus::Open.as_str())
        .count();
    let priorities = top_counts(tickets.iter().map(|t| t.priority.as_str()), 3);
    let categories = top_counts(
        tickets
            .iter()
            .map(|t| t.category.as_deref().unwrap_or("Unknown")),
        3,
    );

    let mut context = format!(
        "Current IT Tickets Data:\n\
         Total tickets: {}\n\
         Open tickets: {}\n\
         Priority distribution: {}\n\
         Top categories: {}\n\
         \nRecent tickets:\n",
        tickets.len(),
        open,
        format_counts(&priorities),
        format_counts(&categories)
    );
    for ticket in tickets.iter().take(5) {
        context.push_str(&format!(
            "- {}: {} - {}\n",
            ticket.title, ticket.priority, ticket.status
        ));
    }
    context
}

fn wants_analysis(question: &str) -> bool {
    let lowered = question.to_lowercase();
    lowered.contains("analyse") || lowered.contains("analyze") || lowered.contains("pattern")
}

/// 読み取り失敗はログに残して空として扱う
fn or_empty<T>(result: Result<Vec<T>, DbErr>, kind: &str) -> Vec<T> {
    result.unwrap_or_else(|e| {
        warn!(kind = kind, error = %e, "Assistant could not read records");
        Vec::new()
    })
}

pub struct AssistantService {
    incident_repo: Arc<SecurityIncidentRepository>,
    dataset_repo: Arc<DatasetRepository>,
    ticket_repo: Arc<ItTicketRepository>,
}

impl AssistantService {
    pub fn new(
        incident_repo: Arc<SecurityIncidentRepository>,
        dataset_repo: Arc<DatasetRepository>,
        ticket_repo: Arc<ItTicketRepository>,
    ) -> Self {
        Self {
            incident_repo,
            dataset_repo,
            ticket_repo,
        }
    }

    async fn incidents(&self) -> Vec<security_incident_model::Model> {
        or_empty(self.incident_repo.find_all().await, "incidents")
    }

    async fn datasets(&self) -> Vec<dataset_model::Model> {
        or_empty(self.dataset_repo.find_all().await, "datasets")
    }

    async fn tickets(&self) -> Vec<it_ticket_model::Model> {
        or_empty(self.ticket_repo.find_all().await, "tickets")
    }

    /// ロールが閲覧できる種別ごとの要約
    pub async fn summary(&self, role: &str) -> AssistantSummary {
        let allowed = allowed_dashboards(role);
        let mut summary = AssistantSummary::default();

        if allowed.contains(&Dashboard::Security) {
            summary.incidents = Some(incident_summary(&self.incidents().await));
        }
        if allowed.contains(&Dashboard::Data) {
            summary.datasets = Some(dataset_summary(&self.datasets().await));
        }
        if allowed.contains(&Dashboard::ItOps) {
            summary.tickets = Some(ticket_summary(&self.tickets().await));
        }
        summary
    }

    /// 質問の話題に応じたコンテキストと定型の回答を返す
    pub async fn ask(&self, role: &str, question: &str) -> AssistantAnswer {
        let allowed: Vec<Dashboard> = allowed_dashboards(role).into_iter().collect();
        let topic = detect_topic(question, &allowed);

        let (context, summary) = match topic {
            Some(Topic::Incidents) => {
                let rows = self.incidents().await;
                (incident_context(&rows), incident_summary(&rows))
            }
            Some(Topic::Datasets) => {
                let rows = self.datasets().await;
                (dataset_context(&rows), dataset_summary(&rows))
            }
            Some(Topic::Tickets) => {
                let rows = self.tickets().await;
                (ticket_context(&rows), ticket_summary(&rows))
            }
            None => (String::new(), String::new()),
        };

        let answer = if topic.is_some() && (wants_analysis(question) || context.is_empty()) {
            summary
        } else if !context.is_empty() {
            context.clone()
        } else {
            "No related records found. Try asking about incidents, datasets or tickets.".to_string()
        };

        AssistantAnswer {
            question: question.to_string(),
            topic,
            context,
            answer,
        }
    }
}
