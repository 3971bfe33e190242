// platform-backend/src/domain/labels.rs

/// 比較用にラベルを正規化（大文字小文字・区切り文字の違いを吸収）
pub fn normalize_label(s: &str) -> String {
    s.trim()
        .to_lowercase()
        .replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// 表示ラベルで永続化される閉じた語彙のenumを定義する
///
/// `as_str` が返すラベルがそのままDBに保存される。`from_str` は
/// 大文字小文字、`_`、スペースの違いを無視し、`|` で列挙した別名も受け付ける。
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal $(| $alias:literal)*),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            /// 保存・表示に使うラベル
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $label),+
                }
            }

            /// すべての値を定義順で取得
            pub fn all() -> Vec<Self> {
                vec![$(Self::$variant),+]
            }

            /// 文字列から変換（不明な値はNone）
            #[allow(clippy::should_implement_trait)]
            pub fn from_str(s: &str) -> Option<Self> {
                let wanted = $crate::domain::labels::normalize_label(s);
                $(
                    if wanted == $crate::domain::labels::normalize_label($label)
                        $(|| wanted == $crate::domain::labels::normalize_label($alias))*
                    {
                        return Some(Self::$variant);
                    }
                )+
                None
            }

            /// 有効なラベル一覧（エラーメッセージ用）
            pub fn labels() -> Vec<&'static str> {
                vec![$($label),+]
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = String;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::from_str(s).ok_or_else(|| {
                    format!(
                        "Invalid {}: '{}'. Must be one of: {}",
                        $kind,
                        s,
                        Self::labels().join(", ")
                    )
                })
            }
        }

        // データベースとの変換用
        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                let raw = String::deserialize(deserializer)?;
                raw.parse().map_err(serde::de::Error::custom)
            }
        }
    };
}

pub(crate) use labeled_enum;
