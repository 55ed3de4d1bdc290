//! フィールド単位のエラーメッセージ（構造化エラー）

use std::collections::hash_map::{self, HashMap};

use serde::{Deserialize, Serialize};

/// フィールド名 -> メッセージ列 の対応
///
/// メッセージは追加順を保持し、重複も除去しない。キーの順序は意味を持たない。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StructuredErrors(HashMap<String, Vec<String>>);

impl StructuredErrors {
    /// 空のStructuredErrorsを作成
    pub fn new() -> Self {
        Self::default()
    }

    /// フィールドにメッセージを追加（キーがなければ空の列を作成してから追加）
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// メッセージを追加して自身を返す
    pub fn with(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
        self.add(field, message);
        self
    }

    /// フィールドのメッセージ列を取得
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.0.get(field).map(Vec::as_slice)
    }

    /// フィールドが存在するか
    pub fn contains_field(&self, field: &str) -> bool {
        self.0.contains_key(field)
    }

    /// エラーが一件もないか
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// フィールド数
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// (フィールド名, メッセージ列) を走査
    pub fn iter(&self) -> hash_map::Iter<'_, String, Vec<String>> {
        self.0.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for StructuredErrors
where
    K: Into<String>,
    V: Into<String>,
{
    /// (フィールド, メッセージ) の列から構築（同じフィールドは追記）
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut errors = Self::new();
        for (field, message) in iter {
            errors.add(field, message);
        }
        errors
    }
}

impl<'a> IntoIterator for &'a StructuredErrors {
    type Item = (&'a String, &'a Vec<String>);
    type IntoIter = hash_map::Iter<'a, String, Vec<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
