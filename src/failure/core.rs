//! 分類済みの失敗型

use std::error::Error as StdError;
use std::fmt;

use super::category::{Category, Layer};
use super::errors::StructuredErrors;

/// 内部原因として保持できるエラー
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// 層とカテゴリで分類された失敗
///
/// カテゴリと層は生成時に確定し、以降変更できない。包み直しは常に新しい
/// `Failure` を作り、元の失敗を内部原因として所有する。
#[derive(Debug)]
pub struct Failure {
    layer: Layer,
    category: Category,
    message: String,
    errors: StructuredErrors,
    inner: Option<BoxError>,
}

impl Failure {
    /// この層で検出した不正な入力を表すValidation失敗を作成
    pub fn validation(layer: Layer, message: impl Into<String>) -> Self {
        Self {
            layer,
            category: Category::Validation,
            message: message.into(),
            errors: StructuredErrors::new(),
            inner: None,
        }
    }

    /// 想定外のエラーをこの層のService失敗として包む
    ///
    /// 包むエラーが `Failure` であれば構造化エラーも複製する。
    pub fn service(layer: Layer, error: impl Into<BoxError>) -> Self {
        let error = error.into();
        let errors = error
            .downcast_ref::<Failure>()
            .map(|failure| failure.errors.clone())
            .unwrap_or_default();
        Self {
            layer,
            category: Category::Service,
            message: error.to_string(),
            errors,
            inner: Some(error),
        }
    }

    /// 下位層の失敗を指定カテゴリで包み直す（メッセージと構造化エラーは複製）
    pub fn wrap(layer: Layer, category: Category, inner: Failure) -> Self {
        Self {
            layer,
            category,
            message: inner.message.clone(),
            errors: inner.errors.clone(),
            inner: Some(Box::new(inner)),
        }
    }

    /// 下位層の失敗をDependencyValidationとして包み直す
    pub fn dependency_validation(layer: Layer, inner: Failure) -> Self {
        Self::wrap(layer, Category::DependencyValidation, inner)
    }

    /// 下位層の失敗をDependencyとして包み直す
    pub fn dependency(layer: Layer, inner: Failure) -> Self {
        Self::wrap(layer, Category::Dependency, inner)
    }

    /// メッセージを上書き
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// フィールドエラーを追加して自身を返す
    pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.add(field, message);
        self
    }

    /// フィールドエラーを追加
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.errors.add(field, message);
    }

    /// フィールドエラーが一件でもあれば自身をErrとして返す
    pub fn throw_if_contains_errors(self) -> Result<(), Failure> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// 失敗が発生した層
    pub fn layer(&self) -> Layer {
        self.layer
    }

    /// カテゴリ
    pub fn category(&self) -> Category {
        self.category
    }

    /// メッセージ
    pub fn message(&self) -> &str {
        &self.message
    }

    /// 構造化エラー
    pub fn errors(&self) -> &StructuredErrors {
        &self.errors
    }

    /// 内部原因
    pub fn inner_cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.inner.as_deref()
    }

    /// 内部原因が分類済みの失敗であれば取得
    pub fn inner_failure(&self) -> Option<&Failure> {
        self.inner
            .as_deref()
            .and_then(|inner| inner.downcast_ref::<Failure>())
    }

    /// 分類済みの失敗の連鎖をたどった最も内側の失敗
    pub fn root_failure(&self) -> &Failure {
        let mut current = self;
        while let Some(inner) = current.inner_failure() {
            current = inner;
        }
        current
    }

    /// 内部原因の連鎖をたどった最も内側のエラー
    pub fn root_cause(&self) -> &(dyn StdError + 'static) {
        let mut current: &(dyn StdError + 'static) = self;
        while let Some(source) = current.source() {
            current = source;
        }
        current
    }

    /// 最も内側の分類済み失敗のカテゴリ
    pub fn root_category(&self) -> Category {
        self.root_failure().category
    }

    /// 呼び出し元の責任（Validation系に遡る）失敗か
    pub fn is_caller_fault(&self) -> bool {
        self.category.is_validation_rooted()
    }
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl StdError for Failure {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.inner.as_deref().map(|inner| inner as &(dyn StdError + 'static))
    }
}
