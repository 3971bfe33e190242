// src/utils/time.rs

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_HOUR: f64 = 3_600_000.0;

const NAIVE_DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
];

/// 2つの時刻の差を時間単位で返す（負にはならない）
pub fn elapsed_hours(from: DateTime<Utc>, to: DateTime<Utc>) -> f64 {
    let millis = (to - from).num_milliseconds() as f64;
    (millis / MILLIS_PER_HOUR).max(0.0)
}

/// CSVなどから受け取った日時文字列を解釈する
///
/// RFC 3339、タイムゾーンなしの日時（UTCとみなす）、日付のみを受け付ける。
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(value, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
