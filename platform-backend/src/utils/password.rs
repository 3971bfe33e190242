// src/utils/password.rs

use argon2::{
    password_hash::{rand_core::OsRng, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use std::env;
use thiserror::Error;

/// パスワード関連のエラー
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed: {0}")]
    HashingError(#[from] argon2::password_hash::Error),

    #[error("Argon2 parameter error: {0}")]
    Argon2Error(#[from] argon2::Error),

    #[error("Password must not be empty")]
    EmptyPassword,
}

/// Argon2 設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Config {
    /// メモリコスト（KB）
    pub memory_cost: u32,
    /// 時間コスト（反復回数）
    pub time_cost: u32,
    /// 並列度
    pub parallelism: u32,
    /// 出力長
    pub output_length: usize,
}

impl Default for Argon2Config {
    fn default() -> Self {
        Self {
            memory_cost: 19456, // 19MB
            time_cost: 2,
            parallelism: 1,
            output_length: 32,
        }
    }
}

impl Argon2Config {
    /// 環境変数から設定を読み込み
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            memory_cost: env_or("ARGON2_MEMORY_COST", defaults.memory_cost),
            time_cost: env_or("ARGON2_TIME_COST", defaults.time_cost),
            parallelism: env_or("ARGON2_PARALLELISM", defaults.parallelism),
            output_length: env_or("ARGON2_OUTPUT_LENGTH", defaults.output_length),
        }
    }

    /// テスト用の低コスト設定
    pub fn for_testing() -> Self {
        Self {
            memory_cost: 1024,
            time_cost: 1,
            parallelism: 1,
            output_length: 32,
        }
    }
}

fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(default)
}

/// 存在しないユーザーの照合に使う入力
const DUMMY_PASSWORD: &str = "no-such-user-placeholder";

/// パスワードハッシュマネージャー
///
/// 作成後は不変のため、複数リクエストから同時に呼び出してよい。
#[derive(Clone)]
pub struct PasswordManager {
    argon2: Argon2<'static>,
    dummy_hash: String,
}

impl PasswordManager {
    /// 新しいPasswordManagerを作成
    pub fn new(config: Argon2Config) -> Result<Self, PasswordError> {
        let params = argon2::Params::new(
            config.memory_cost,
            config.time_cost,
            config.parallelism,
            Some(config.output_length),
        )?;

        let argon2 = Argon2::new(argon2::Algorithm::Argon2id, argon2::Version::V0x13, params);

        let salt = SaltString::generate(&mut OsRng);
        let dummy_hash = argon2
            .hash_password(DUMMY_PASSWORD.as_bytes(), &salt)?
            .to_string();

        Ok(Self { argon2, dummy_hash })
    }

    /// 現在のコスト設定で作った照合専用のハッシュ
    ///
    /// ユーザーが存在しない場合もこれに対して照合し、処理時間をそろえる。
    pub fn dummy_hash(&self) -> &str {
        &self.dummy_hash
    }

    /// 環境変数から設定を読み込んでPasswordManagerを作成
    pub fn from_env() -> Result<Self, PasswordError> {
        Self::new(Argon2Config::from_env())
    }

    /// パスワードをハッシュ化
    ///
    /// 呼び出しごとに新しいソルトを生成するため、同じ入力でも結果は毎回異なる。
    /// 返り値はパラメータとソルトを含むPHC文字列。
    pub fn hash_password(&self, password: &str) -> Result<String, PasswordError> {
        if password.is_empty() {
            return Err(PasswordError::EmptyPassword);
        }

        let salt = SaltString::generate(&mut OsRng);

        let password_hash = self.argon2.hash_password(password.as_bytes(), &salt)?;

        Ok(password_hash.to_string())
    }

    /// パスワードを検証
    ///
    /// ハッシュ文字列に埋め込まれたパラメータで再計算する。
    /// 壊れたハッシュ文字列に対してはエラーにせず `false` を返す。
    pub fn verify_password(&self, password: &str, hash: &str) -> bool {
        let parsed_hash = match PasswordHash::new(hash) {
            Ok(parsed) => parsed,
            Err(e) => {
                tracing::warn!(error = %e, "Stored password hash could not be parsed");
                return false;
            }
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed_hash)
            .is_ok()
    }
}
