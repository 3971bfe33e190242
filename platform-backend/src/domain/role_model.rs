// platform-backend/src/domain/role_model.rs

use crate::domain::labels::labeled_enum;

labeled_enum! {
    /// ロール名を表すenum
    ///
    /// ユーザー作成後にロールを変更する経路は存在しない。
    RoleName, "role" {
        Admin => "admin",
        Security => "security" | "cybersecurity",
        DataScience => "data_science",
        ItOperations => "it_operations",
    }
}
