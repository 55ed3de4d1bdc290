//! Foundation層: フィールド記述の取得と検証

use std::collections::HashMap;

use log::debug;

use crate::failure::{BoxError, Failure, Layer, LayerGuard};

use super::broker::ReflectionBroker;
use super::model::{ContentSource, FieldDescriptor};

const GUARD: LayerGuard = LayerGuard::new(Layer::Foundation);

/// 検証済みのフィールド記述を返すサービス
#[cfg_attr(test, mockall::automock)]
pub trait PropertyService {
    fn retrieve_properties(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<FieldDescriptor>, Failure>;
}

/// Broker を使う PropertyService の実装
#[derive(Debug, Clone, Default)]
pub struct FoundationPropertyService<B> {
    broker: B,
}

impl<B: ReflectionBroker> FoundationPropertyService<B> {
    pub fn new(broker: B) -> Self {
        Self { broker }
    }
}

impl<B: ReflectionBroker> PropertyService for FoundationPropertyService<B> {
    fn retrieve_properties(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<FieldDescriptor>, Failure> {
        GUARD.try_catch(|| -> Result<_, BoxError> {
            let fields = self.broker.describe(source)?;
            validate_fields(&fields)?;
            debug!("Retrieved {} properties", fields.len());
            Ok(fields)
        })
    }
}

/// フィールド名・パート名・ファイル名の検証
///
/// パート名は属性付きフィールドの間で一意でなければならない。
fn validate_fields(fields: &[FieldDescriptor]) -> Result<(), Failure> {
    let mut failure = Failure::validation(
        Layer::Foundation,
        "Invalid content source, fix the errors and try again.",
    );
    let mut owners: HashMap<&str, &str> = HashMap::new();

    for descriptor in fields {
        if descriptor.field.trim().is_empty() {
            failure.add_error("field", "Field name is required");
            continue;
        }

        let Some(attribute) = &descriptor.attribute else {
            continue;
        };

        let name = attribute.name();
        if name.trim().is_empty() {
            failure.add_error(descriptor.field.as_str(), "Content name is required");
        } else {
            let owner = *owners.entry(name).or_insert(descriptor.field.as_str());
            if owner != descriptor.field {
                failure.add_error(
                    descriptor.field.as_str(),
                    format!("Content name '{}' is already used by '{}'", name, owner),
                );
            }
        }

        if matches!(attribute.file_name(), Some(file_name) if file_name.trim().is_empty()) {
            failure.add_error(descriptor.field.as_str(), "File name is required");
        }
    }

    failure.throw_if_contains_errors()
}
