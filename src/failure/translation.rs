//! 層をまたぐ失敗の変換（ガード付き実行）

use std::future::Future;

use super::category::Layer;
use super::core::{BoxError, Failure};

/// 各サービス層が自身の処理を包むガード
///
/// - 同じ層の `Failure` はそのまま通す（この層で検出したValidation等）
/// - 他の層の `Failure` は [`Category::translated`](super::Category::translated) に従って包み直す
/// - 分類されていないエラーはこの層のService失敗として包む
///
/// ログ出力・リトライ・回復は一切行わない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayerGuard {
    layer: Layer,
}

impl LayerGuard {
    /// 指定した層のガードを作成
    pub const fn new(layer: Layer) -> Self {
        Self { layer }
    }

    /// ガードの層
    pub const fn layer(&self) -> Layer {
        self.layer
    }

    /// エラーをこの層の失敗に変換
    pub fn translate(&self, error: BoxError) -> Failure {
        match error.downcast::<Failure>() {
            Ok(failure) if failure.layer() == self.layer => *failure,
            Ok(failure) => {
                let category = failure.category().translated();
                Failure::wrap(self.layer, category, *failure)
            }
            Err(other) => Failure::service(self.layer, other),
        }
    }

    /// 処理を実行し、失敗をこの層の失敗に変換して返す（成功時の値はそのまま）
    pub fn try_catch<T, E, F>(&self, f: F) -> Result<T, Failure>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<BoxError>,
    {
        f().map_err(|error| self.translate(error.into()))
    }

    /// 非同期処理版の [`LayerGuard::try_catch`]（呼び出し元のタスク上で待機する）
    pub async fn try_catch_async<T, E, Fut>(&self, fut: Fut) -> Result<T, Failure>
    where
        Fut: Future<Output = Result<T, E>>,
        E: Into<BoxError>,
    {
        fut.await.map_err(|error| self.translate(error.into()))
    }
}
