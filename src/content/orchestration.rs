//! Orchestration層: 属性と値を突き合わせてパートを組み立てる

use log::debug;

use crate::failure::{Failure, Layer, LayerGuard};

use super::model::{ContentAttribute, ContentPart, ContentSource, ContentValue, FieldDescriptor};
use super::processing::PropertyProcessingService;

const GUARD: LayerGuard = LayerGuard::new(Layer::Orchestration);

/// ContentSource からコンテンツパートを組み立てるサービス
#[derive(Debug, Clone, Default)]
pub struct ContentOrchestrationService<P> {
    processing: P,
}

impl<P: PropertyProcessingService> ContentOrchestrationService<P> {
    pub fn new(processing: P) -> Self {
        Self { processing }
    }

    /// 宣言順のパート一覧を返す
    ///
    /// 値の種類が属性と一致しないフィールドはこの層のValidation失敗になる。
    pub fn build_parts(&self, source: &dyn ContentSource) -> Result<Vec<ContentPart>, Failure> {
        GUARD.try_catch(|| {
            let fields = self.processing.retrieve_content_properties(source)?;
            let parts = assemble(fields)?;
            debug!("Built {} content parts", parts.len());
            Ok::<_, Failure>(parts)
        })
    }
}

fn assemble(fields: Vec<FieldDescriptor>) -> Result<Vec<ContentPart>, Failure> {
    let mut failure = Failure::validation(
        Layer::Orchestration,
        "Content values do not match their attributes.",
    );
    let mut parts = Vec::with_capacity(fields.len());

    for FieldDescriptor { field, attribute, value } in fields {
        let Some(attribute) = attribute else {
            continue;
        };

        let body = match (&attribute, value) {
            (ContentAttribute::ByteArray { .. }, ContentValue::Bytes(body)) => body,
            (ContentAttribute::Text { .. }, ContentValue::Text(text)) => text.into(),
            (ContentAttribute::FileStream { .. }, ContentValue::Stream(body)) => body,
            (_, ContentValue::Absent) => {
                failure.add_error(field, "Value is required");
                continue;
            }
            (attribute, value) => {
                failure.add_error(
                    field,
                    format!("Expected a {} value but found {}", attribute.kind(), value.kind()),
                );
                continue;
            }
        };

        parts.push(ContentPart {
            name: attribute.name().to_string(),
            file_name: attribute.file_name().map(str::to_string),
            body,
        });
    }

    failure.throw_if_contains_errors()?;
    Ok(parts)
}
