//! 分類済みの失敗と、層をまたぐ変換規約

pub mod category;
pub mod core;
pub mod errors;
pub mod translation;

pub use category::{Category, Layer};
pub use self::core::{BoxError, Failure};
pub use errors::StructuredErrors;
pub use translation::LayerGuard;

#[cfg(test)]
mod tests;
