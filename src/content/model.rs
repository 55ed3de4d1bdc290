//! コンテンツ属性のデータモデル

use bytes::Bytes;

/// フィールドに付与するコンテンツ属性
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentAttribute {
    /// バイト列のパート
    ByteArray { name: String },
    /// テキストのパート
    Text { name: String },
    /// ファイル名付きのストリームパート
    FileStream { name: String, file_name: String },
}

impl ContentAttribute {
    /// バイト列属性を作成
    pub fn byte_array(name: impl Into<String>) -> Self {
        ContentAttribute::ByteArray { name: name.into() }
    }

    /// テキスト属性を作成
    pub fn text(name: impl Into<String>) -> Self {
        ContentAttribute::Text { name: name.into() }
    }

    /// ストリーム属性を作成
    pub fn file_stream(name: impl Into<String>, file_name: impl Into<String>) -> Self {
        ContentAttribute::FileStream {
            name: name.into(),
            file_name: file_name.into(),
        }
    }

    /// パート名
    pub fn name(&self) -> &str {
        match self {
            ContentAttribute::ByteArray { name }
            | ContentAttribute::Text { name }
            | ContentAttribute::FileStream { name, .. } => name,
        }
    }

    /// ファイル名（ストリーム属性のみ）
    pub fn file_name(&self) -> Option<&str> {
        match self {
            ContentAttribute::FileStream { file_name, .. } => Some(file_name),
            _ => None,
        }
    }

    /// 属性の種類名
    pub fn kind(&self) -> &'static str {
        match self {
            ContentAttribute::ByteArray { .. } => "byte array",
            ContentAttribute::Text { .. } => "text",
            ContentAttribute::FileStream { .. } => "file stream",
        }
    }
}

/// フィールドの値
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentValue {
    Bytes(Bytes),
    Text(String),
    Stream(Bytes),
    /// 値が設定されていない
    Absent,
}

impl ContentValue {
    /// 値の種類名
    pub fn kind(&self) -> &'static str {
        match self {
            ContentValue::Bytes(_) => "byte array",
            ContentValue::Text(_) => "text",
            ContentValue::Stream(_) => "file stream",
            ContentValue::Absent => "absent",
        }
    }
}

/// 1フィールド分の記述
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// フィールド名
    pub field: String,
    /// コンテンツ属性（なければパートにならない）
    pub attribute: Option<ContentAttribute>,
    /// 値
    pub value: ContentValue,
}

impl FieldDescriptor {
    /// 属性付きのフィールドを作成
    pub fn attributed(
        field: impl Into<String>,
        attribute: ContentAttribute,
        value: ContentValue,
    ) -> Self {
        Self {
            field: field.into(),
            attribute: Some(attribute),
            value,
        }
    }

    /// 属性なしのフィールドを作成
    pub fn plain(field: impl Into<String>, value: ContentValue) -> Self {
        Self {
            field: field.into(),
            attribute: None,
            value,
        }
    }
}

/// 自身のフィールドを宣言順に記述できる型
pub trait ContentSource {
    fn describe(&self) -> Vec<FieldDescriptor>;
}

/// 組み立て済みのコンテンツパート
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentPart {
    pub name: String,
    pub file_name: Option<String>,
    pub body: Bytes,
}
