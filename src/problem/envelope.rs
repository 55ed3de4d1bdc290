//! レスポンスエンベロープ（ステータスコード + ボディ）とその描画

use log::{debug, warn};
use serde::Serialize;

use crate::common::{RenderOptions, Response, ResponseBuilder, StatusCode, APPLICATION_JSON};
use crate::error::Error;

use super::detail::{ProblemDetail, ProblemSource};
use super::table::Family;

/// HTTPフレームワークへ渡す直前のレスポンス
///
/// problem details を持つ系統と、呼び出し元のペイロードを持つ系統は別の変種として扱う。
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseEnvelope<T = serde_json::Value> {
    /// 失敗から構築した problem details
    Problem {
        status: StatusCode,
        body: ProblemDetail,
    },
    /// 呼び出し元のペイロード（任意でLocation付き）
    Payload {
        status: StatusCode,
        body: T,
        location: Option<String>,
    },
    /// ステータスコードのみ
    Empty { status: StatusCode },
}

impl<T> ResponseEnvelope<T> {
    /// ステータスコード
    pub fn status(&self) -> StatusCode {
        match self {
            ResponseEnvelope::Problem { status, .. }
            | ResponseEnvelope::Payload { status, .. }
            | ResponseEnvelope::Empty { status } => *status,
        }
    }

    /// problem details を取得
    pub fn problem(&self) -> Option<&ProblemDetail> {
        match self {
            ResponseEnvelope::Problem { body, .. } => Some(body),
            _ => None,
        }
    }

    /// ペイロードを取得
    pub fn payload(&self) -> Option<&T> {
        match self {
            ResponseEnvelope::Payload { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Locationを取得
    pub fn location(&self) -> Option<&str> {
        match self {
            ResponseEnvelope::Payload { location, .. } => location.as_deref(),
            _ => None,
        }
    }
}

impl<T: Serialize> ResponseEnvelope<T> {
    /// 指定の設定でResponseへ描画
    pub fn render(self, options: &RenderOptions) -> Result<Response, Error> {
        let status = self.status();
        let mut builder = ResponseBuilder::with_status(status);

        builder = match self {
            ResponseEnvelope::Problem { body, .. } => {
                builder.json_as(&body, &options.problem_content_type)?
            }
            ResponseEnvelope::Payload { body, location, .. } => {
                let builder = builder.json_as(&body, APPLICATION_JSON)?;
                match location {
                    Some(location) => builder.try_header("Location", location)?,
                    None => builder,
                }
            }
            ResponseEnvelope::Empty { .. } => builder,
        };

        if options.security_headers {
            builder = builder.security_headers();
        }

        debug!("Rendered {} {} envelope", status.as_u16(), status.reason_phrase());
        Ok(builder.build())
    }
}

/// レスポンス変換トレイト
pub trait ResponseWrapper {
    /// 自身をResponseに変換
    fn into_response(self) -> Result<Response, Error>;
}

/// 環境変数の設定で描画する
impl<T: Serialize> ResponseWrapper for ResponseEnvelope<T> {
    fn into_response(self) -> Result<Response, Error> {
        let status = self.status();
        self.render(&RenderOptions::from_env()).map_err(|e| {
            warn!("Failed to render {} envelope: {}", status.as_u16(), e);
            e
        })
    }
}

/// Response型に対するResponseWrapper実装（恒等関数）
impl ResponseWrapper for Response {
    fn into_response(self) -> Result<Response, Error> {
        Ok(self)
    }
}

/// 任意のステータスコードで problem details のエンベロープを構築
///
/// problem details 系統以外のステータスコードは `Error::FamilyMismatch`。
pub fn build_response<F>(status: StatusCode, failure: &F) -> Result<ResponseEnvelope, Error>
where
    F: ProblemSource + ?Sized,
{
    match status.family() {
        Family::Problem(problem_type) => Ok(problem_type.envelope(failure)),
        _ => Err(family_mismatch(status, "problem")),
    }
}

/// 任意のステータスコードでペイロードのエンベロープを構築
pub fn build_payload<T>(
    status: StatusCode,
    body: T,
    location: Option<String>,
) -> Result<ResponseEnvelope<T>, Error> {
    match status.family() {
        Family::Payload => Ok(ResponseEnvelope::Payload {
            status,
            body,
            location,
        }),
        _ => Err(family_mismatch(status, "payload")),
    }
}

/// 任意のステータスコードでボディなしのエンベロープを構築
pub fn build_empty(status: StatusCode) -> Result<ResponseEnvelope, Error> {
    match status.family() {
        Family::Empty => Ok(ResponseEnvelope::Empty { status }),
        _ => Err(family_mismatch(status, "empty")),
    }
}

fn family_mismatch(status: StatusCode, expected: &'static str) -> Error {
    Error::FamilyMismatch {
        status: status.as_u16(),
        expected,
    }
}
