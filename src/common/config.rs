//! 描画設定（環境変数から読み込む）

use log::warn;

use super::http::APPLICATION_PROBLEM_JSON;
use super::utils::{is_header_value_valid, non_empty_env_var, parse_bool};

/// problem details のContent-Typeを上書きする環境変数
pub const PROBLEM_CONTENT_TYPE_ENV: &str = "PROBLEMBRIDGE_PROBLEM_CONTENT_TYPE";

/// セキュリティヘッダー付与の有無を切り替える環境変数
pub const SECURITY_HEADERS_ENV: &str = "PROBLEMBRIDGE_SECURITY_HEADERS";

/// エンベロープをResponseへ描画する際の設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// problem details ボディのContent-Type
    pub problem_content_type: String,
    /// 標準的なセキュリティヘッダーを付与するか
    pub security_headers: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            problem_content_type: APPLICATION_PROBLEM_JSON.to_string(),
            security_headers: true,
        }
    }
}

impl RenderOptions {
    /// 環境変数から設定を構築
    /// 優先順位: 環境変数 -> デフォルト（不正な値は警告してデフォルトを使う）
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let problem_content_type = match non_empty_env_var(PROBLEM_CONTENT_TYPE_ENV) {
            Some(value) if is_header_value_valid(&value) => value,
            Some(value) => {
                warn!(
                    "{} contains invalid characters: {:?}. Using default",
                    PROBLEM_CONTENT_TYPE_ENV, value
                );
                defaults.problem_content_type
            }
            None => defaults.problem_content_type,
        };

        let security_headers = match non_empty_env_var(SECURITY_HEADERS_ENV) {
            Some(value) => parse_bool(&value).unwrap_or_else(|| {
                warn!("{} is not a boolean: {:?}. Using default", SECURITY_HEADERS_ENV, value);
                defaults.security_headers
            }),
            None => defaults.security_headers,
        };

        Self {
            problem_content_type,
            security_headers,
        }
    }

    /// problem details のContent-Typeを指定
    pub fn with_problem_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.problem_content_type = content_type.into();
        self
    }

    /// セキュリティヘッダー付与の有無を指定
    pub fn with_security_headers(mut self, enabled: bool) -> Self {
        self.security_headers = enabled;
        self
    }
}
