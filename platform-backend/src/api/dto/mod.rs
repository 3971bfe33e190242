// src/api/dto/mod.rs
pub mod auth_dto;
pub mod common;
pub mod dataset_dto;
pub mod executive_dto;
pub mod incident_dto;
pub mod ticket_dto;

use validator::ValidationErrors;

pub use common::{CreatedResponse, ImportResponse, OperationResult};

/// 検証エラーを1行のメッセージにまとめる（CSV取り込みの行エラー用）
pub fn first_validation_message(errors: &ValidationErrors) -> String {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    fields
        .into_iter()
        .find_map(|(field, errors)| {
            errors.first().map(|error| {
                error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("Invalid {} value", field))
            })
        })
        .unwrap_or_else(|| "Invalid row".to_string())
}

/// 空文字・空白のみの値を未指定として扱う
pub(crate) fn non_blank(value: Option<String>) -> Option<String> {
    value.and_then(|v| {
        let trimmed = v.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// 必須項目のチェック
pub(crate) fn require(value: &str, field: &str) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("Missing required field: {}", field));
    }
    Ok(())
}

/// 任意の列挙値を解釈（空なら既定値）
pub(crate) fn parse_or_default<T>(value: Option<String>) -> Result<T, String>
where
    T: std::str::FromStr<Err = String> + Default,
{
    match non_blank(value) {
        Some(raw) => raw.parse(),
        None => Ok(T::default()),
    }
}

/// 任意の列挙値を解釈（空ならNone）
pub(crate) fn parse_optional<T>(value: Option<String>) -> Result<Option<T>, String>
where
    T: std::str::FromStr<Err = String>,
{
    non_blank(value).map(|raw| raw.parse()).transpose()
}
