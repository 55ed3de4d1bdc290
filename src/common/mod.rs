//! 共通の抽象化レイヤー（HTTP型、描画設定、ユーティリティ）

pub mod config;
pub mod http;
pub mod utils;

pub use config::RenderOptions;
pub use http::{Response, ResponseBuilder, StatusCode, APPLICATION_JSON, APPLICATION_PROBLEM_JSON};
pub use utils::is_header_value_valid;
