//! エラー型の定義

use thiserror::Error;

/// ライブラリ自身のエラー型
///
/// サービス層を流れる分類済みの失敗は [`crate::failure::Failure`] が担う。
/// こちらはレスポンス構築・描画時の運用エラーのみを表す。
#[derive(Error, Debug)]
pub enum Error {
    /// レスポンスのシリアライズエラー
    #[error("Failed to serialize response: {0}")]
    ResponseSerializationError(String),

    /// 不正なヘッダー値
    #[error("Invalid header value for {name}: {value:?}")]
    InvalidHeaderValue {
        /// ヘッダー名
        name: String,
        /// 拒否された値
        value: String,
    },

    /// 未知のステータスコード
    #[error("Unknown status code: {0}")]
    UnknownStatusCode(u16),

    /// ステータスコードの属するレスポンス系統が要求と一致しない
    #[error("Status code {status} does not belong to the {expected} family")]
    FamilyMismatch {
        /// 要求されたステータスコード
        status: u16,
        /// 期待された系統名
        expected: &'static str,
    },
}

impl Error {
    /// エラーからHTTPステータスコードを取得
    pub fn status_code(&self) -> u16 {
        match self {
            Error::ResponseSerializationError(_) => 500,
            Error::InvalidHeaderValue { .. } => 500,
            Error::UnknownStatusCode(_) => 500,
            Error::FamilyMismatch { .. } => 500,
        }
    }
}
