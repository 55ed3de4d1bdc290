//! ProblemBridge: 層をまたぐ失敗をRFC7807の problem details レスポンスへ変換するライブラリ
//!
//! 各サービス層は [`LayerGuard`] で処理を包み、下位層の失敗を変換規約に従って
//! 包み直す。最上位では [`problem::responses`] の関数でステータスコードごとの
//! エンベロープを作り、[`ResponseWrapper`] でフレームワーク非依存のレスポンスに描画する。

pub mod common;
pub mod content;
pub mod error;
pub mod failure;
pub mod problem;

#[cfg(feature = "actix")]
pub mod actix;

pub use common::{RenderOptions, Response, ResponseBuilder, StatusCode};
pub use error::Error;
pub use failure::{BoxError, Category, Failure, Layer, LayerGuard, StructuredErrors};
pub use problem::{
    build_empty, build_payload, build_response, responses, Family, ProblemDetail, ProblemSource,
    ProblemType, ResponseEnvelope, ResponseWrapper,
};
