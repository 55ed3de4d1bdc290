//! problem details 本体と、その材料を提供するトレイト

use std::error::Error as StdError;

use serde::{Deserialize, Serialize};

use crate::failure::{Failure, StructuredErrors};

/// RFC7807形式の problem details
///
/// `errors` は空でも常に出力する（`{}`）。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProblemDetail {
    /// HTTPステータスコード
    pub status: u16,
    /// 問題種別のURI（RFCの該当節）
    #[serde(rename = "type")]
    pub problem_type: String,
    /// タイトル
    pub title: String,
    /// フィールド単位のエラー
    #[serde(default)]
    pub errors: StructuredErrors,
}

/// problem details の材料（タイトルと構造化エラー）を提供する
pub trait ProblemSource {
    /// 既定のタイトル（通常は失敗のメッセージ）
    fn title(&self) -> String;

    /// フィールド単位のエラー
    fn structured_errors(&self) -> StructuredErrors {
        StructuredErrors::new()
    }
}

impl ProblemSource for Failure {
    fn title(&self) -> String {
        self.message().to_string()
    }

    fn structured_errors(&self) -> StructuredErrors {
        self.errors().clone()
    }
}

/// 型消去されたエラー。中身が `Failure` なら構造化エラーも読む
impl ProblemSource for dyn StdError + Send + Sync + 'static {
    fn title(&self) -> String {
        self.to_string()
    }

    fn structured_errors(&self) -> StructuredErrors {
        self.downcast_ref::<Failure>()
            .map(|failure| failure.errors().clone())
            .unwrap_or_default()
    }
}
