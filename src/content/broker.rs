//! ContentSource の記述を読み出すBroker層

use std::collections::HashSet;

use log::debug;
use thiserror::Error;

use super::model::{ContentSource, FieldDescriptor};

/// Broker層のエラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BrokerError {
    #[error("Field '{0}' is described more than once")]
    DuplicateField(String),

    #[error("Content source describes no fields")]
    NoFields,
}

/// ContentSource からフィールド記述を取得する
#[cfg_attr(test, mockall::automock)]
pub trait ReflectionBroker {
    fn describe(&self, source: &dyn ContentSource) -> Result<Vec<FieldDescriptor>, BrokerError>;
}

/// `ContentSource::describe` をそのまま読む既定の実装
#[derive(Debug, Clone, Copy, Default)]
pub struct DescribeBroker;

impl ReflectionBroker for DescribeBroker {
    fn describe(&self, source: &dyn ContentSource) -> Result<Vec<FieldDescriptor>, BrokerError> {
        let fields = source.describe();
        if fields.is_empty() {
            return Err(BrokerError::NoFields);
        }

        let mut seen = HashSet::new();
        for field in &fields {
            if !seen.insert(field.field.as_str()) {
                return Err(BrokerError::DuplicateField(field.field.clone()));
            }
        }

        debug!("Described {} fields", fields.len());
        Ok(fields)
    }
}
