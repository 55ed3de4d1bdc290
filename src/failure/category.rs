//! 失敗の分類（カテゴリ）とアーキテクチャ層

use std::fmt;

/// 上位層が失敗をどう扱うべきかを示すカテゴリ
///
/// 深刻度の順序ではなく、層をまたぐ際の変換方向を表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// 呼び出し元の入力が不正
    Validation,
    /// 下位層の検証エラーに起因（呼び出し元の責任）
    DependencyValidation,
    /// 下位層の内部的な失敗に起因
    Dependency,
    /// この層自身の想定外の失敗
    Service,
}

impl Category {
    /// 下位層から受け取った失敗を、一段上の層で包み直す際のカテゴリ
    ///
    /// Validation / DependencyValidation -> DependencyValidation,
    /// Dependency / Service -> Dependency
    pub const fn translated(self) -> Category {
        match self {
            Category::Validation | Category::DependencyValidation => Category::DependencyValidation,
            Category::Dependency | Category::Service => Category::Dependency,
        }
    }

    /// 呼び出し元の責任に遡る失敗か
    pub const fn is_validation_rooted(self) -> bool {
        matches!(self, Category::Validation | Category::DependencyValidation)
    }

    /// カテゴリ名
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Validation => "Validation",
            Category::DependencyValidation => "DependencyValidation",
            Category::Dependency => "Dependency",
            Category::Service => "Service",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// アーキテクチャ層
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Layer {
    Broker,
    Foundation,
    Processing,
    Orchestration,
    Coordination,
    Aggregation,
    Exposer,
    /// 上記以外の任意の層
    Custom(&'static str),
}

impl Layer {
    /// 層の名前
    pub const fn name(self) -> &'static str {
        match self {
            Layer::Broker => "Broker",
            Layer::Foundation => "Foundation",
            Layer::Processing => "Processing",
            Layer::Orchestration => "Orchestration",
            Layer::Coordination => "Coordination",
            Layer::Aggregation => "Aggregation",
            Layer::Exposer => "Exposer",
            Layer::Custom(name) => name,
        }
    }
}

impl fmt::Display for Layer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
