// platform-backend/src/domain/dataset_types.rs

use crate::domain::labels::labeled_enum;

labeled_enum! {
    /// データセットの提供元部門
    Department, "department" {
        Sales => "Sales",
        Marketing => "Marketing",
        Engineering => "Engineering",
        Finance => "Finance",
        Hr => "HR",
        Operations => "Operations",
    }
}

labeled_enum! {
    /// データの機密区分
    Sensitivity, "sensitivity" {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Confidential => "Confidential",
    }
}

/// 品質スコアの有効範囲
pub const QUALITY_SCORE_MIN: f64 = 0.0;
pub const QUALITY_SCORE_MAX: f64 = 10.0;

/// 品質スコアが有効範囲内かチェック
pub fn is_valid_quality_score(score: f64) -> bool {
    score.is_finite() && (QUALITY_SCORE_MIN..=QUALITY_SCORE_MAX).contains(&score)
}
