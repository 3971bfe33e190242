// src/service/search_service.rs

//! 一覧画面の検索・絞り込み（DBアクセスなしの純粋関数）
//!
//! 列挙値の比較は表記ゆれ（大文字小文字、`_`）を吸収する。
//! 空文字または "All" の条件は指定なしとして扱う。

use crate::api::dto::dataset_dto::DatasetFilterQuery;
use crate::api::dto::incident_dto::IncidentFilterQuery;
use crate::api::dto::ticket_dto::TicketFilterQuery;
use crate::domain::labels::normalize_label;
use crate::domain::{dataset_model, it_ticket_model, security_incident_model};
use chrono::{DateTime, Utc};

fn active(criterion: &Option<String>) -> Option<&str> {
    criterion
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty() && !value.eq_ignore_ascii_case("all"))
}

fn label_matches(criterion: &Option<String>, value: &str) -> bool {
    match active(criterion) {
        Some(wanted) => normalize_label(wanted) == normalize_label(value),
        None => true,
    }
}

fn optional_label_matches(criterion: &Option<String>, value: Option<&str>) -> bool {
    match active(criterion) {
        Some(_) => value.is_some_and(|v| label_matches(criterion, v)),
        None => true,
    }
}

/// 期間指定（両端を含む）
fn within_range(at: DateTime<Utc>, from: Option<DateTime<Utc>>, to: Option<DateTime<Utc>>) -> bool {
    if let Some(from) = from {
        if at < from {
            return false;
        }
    }
    if let Some(to) = to {
        if at > to {
            return false;
        }
    }
    true
}

/// 部分一致検索（大文字小文字を区別しない）
fn text_matches(search: &Option<String>, fields: &[Option<&str>]) -> bool {
    let Some(term) = search.as_deref().map(str::trim).filter(|t| !t.is_empty()) else {
        return true;
    };
    let term = term.to_lowercase();

    fields
        .iter()
        .flatten()
        .any(|field| field.to_lowercase().contains(&term))
}

pub fn filter_incidents(
    incidents: Vec<security_incident_model::Model>,
    query: &IncidentFilterQuery,
) -> Vec<security_incident_model::Model> {
    incidents
        .into_iter()
        .filter(|incident| {
            text_matches(
                &query.search,
                &[
                    Some(incident.title.as_str()),
                    incident.description.as_deref(),
                    Some(incident.threat_type.as_str()),
                    incident.assigned_to.as_deref(),
                ],
            )
        })
        .filter(|incident| label_matches(&query.threat_type, &incident.threat_type))
        .filter(|incident| label_matches(&query.severity, &incident.severity))
        .filter(|incident| label_matches(&query.status, &incident.status))
        .filter(|incident| within_range(incident.created_at, query.from, query.to))
        .collect()
}

pub fn filter_datasets(
    datasets: Vec<dataset_model::Model>,
    query: &DatasetFilterQuery,
) -> Vec<dataset_model::Model> {
    let quality_bounded = query.min_quality.is_some() || query.max_quality.is_some();
    let min = query.min_quality.unwrap_or(f64::NEG_INFINITY);
    let max = query.max_quality.unwrap_or(f64::INFINITY);

    datasets
        .into_iter()
        .filter(|dataset| {
            text_matches(
                &query.search,
                &[
                    Some(dataset.name.as_str()),
                    Some(dataset.source_department.as_str()),
                    dataset.sensitivity.as_deref(),
                ],
            )
        })
        .filter(|dataset| label_matches(&query.department, &dataset.source_department))
        .filter(|dataset| optional_label_matches(&query.sensitivity, dataset.sensitivity.as_deref()))
        .filter(|dataset| {
            if !quality_bounded {
                return true;
            }
            // スコア未設定の行は範囲指定時に除外
            dataset
                .quality_score
                .is_some_and(|score| score >= min && score <= max)
        })
        .collect()
}

pub fn filter_tickets(
    tickets: Vec<it_ticket_model::Model>,
    query: &TicketFilterQuery,
) -> Vec<it_ticket_model::Model> {
    tickets
        .into_iter()
        .filter(|ticket| {
            text_matches(
                &query.search,
                &[
                    Some(ticket.title.as_str()),
                    ticket.description.as_deref(),
                    ticket.category.as_deref(),
                    Some(ticket.assigned_to.as_str()),
                ],
            )
        })
        .filter(|ticket| optional_label_matches(&query.category, ticket.category.as_deref()))
        .filter(|ticket| label_matches(&query.priority, &ticket.priority))
        .filter(|ticket| label_matches(&query.status, &ticket.status))
        .filter(|ticket| match active(&query.assigned_to) {
            Some(assignee) => ticket.assigned_to.eq_ignore_ascii_case(assignee),
            None => true,
        })
        .collect()
}
