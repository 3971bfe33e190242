// platform-backend/src/domain/permission.rs

//! ロールとダッシュボードの対応表
//!
//! 副作用のない純粋関数のみ。不明なロールは空集合（fail closed）。

use crate::domain::dashboard::Dashboard;
use crate::domain::role_model::RoleName;
use std::collections::BTreeSet;

/// ロールごとに許可されたダッシュボード
pub fn dashboards_for_role(role: RoleName) -> BTreeSet<Dashboard> {
    let dashboards: &[Dashboard] = match role {
        RoleName::Admin => &[
            Dashboard::Executive,
            Dashboard::Security,
            Dashboard::Data,
            Dashboard::ItOps,
            Dashboard::Assistant,
        ],
        RoleName::Security => &[
            Dashboard::Executive,
            Dashboard::Security,
            Dashboard::Assistant,
        ],
        RoleName::DataScience => &[Dashboard::Executive, Dashboard::Data, Dashboard::Assistant],
        RoleName::ItOperations => &[
            Dashboard::Executive,
            Dashboard::ItOps,
            Dashboard::Assistant,
        ],
    };

    dashboards.iter().copied().collect()
}

/// 保存されているロール文字列から許可ダッシュボードを取得
pub fn allowed_dashboards(role: &str) -> BTreeSet<Dashboard> {
    RoleName::from_str(role)
        .map(dashboards_for_role)
        .unwrap_or_default()
}
