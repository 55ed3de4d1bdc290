//! Processing層: 属性付きフィールドの抽出

use crate::failure::{Failure, Layer, LayerGuard};

use super::foundation::PropertyService;
use super::model::{ContentSource, FieldDescriptor};

const GUARD: LayerGuard = LayerGuard::new(Layer::Processing);

/// 属性付きフィールドだけを宣言順に返すサービス
#[cfg_attr(test, mockall::automock)]
pub trait PropertyProcessingService {
    fn retrieve_content_properties(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<FieldDescriptor>, Failure>;
}

#[derive(Debug, Clone, Default)]
pub struct ContentPropertyProcessor<P> {
    properties: P,
}

impl<P: PropertyService> ContentPropertyProcessor<P> {
    pub fn new(properties: P) -> Self {
        Self { properties }
    }
}

impl<P: PropertyService> PropertyProcessingService for ContentPropertyProcessor<P> {
    fn retrieve_content_properties(
        &self,
        source: &dyn ContentSource,
    ) -> Result<Vec<FieldDescriptor>, Failure> {
        GUARD.try_catch(|| {
            let fields = self.properties.retrieve_properties(source)?;
            let attributed = fields.into_iter().filter(|f| f.attribute.is_some());
            Ok::<_, Failure>(attributed.collect())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::foundation::MockPropertyService;
    use crate::content::model::{ContentAttribute, ContentValue};
    use crate::failure::Category;

    struct Empty;

    impl ContentSource for Empty {
        fn describe(&self) -> Vec<FieldDescriptor> {
            Vec::new()
        }
    }

    #[test]
    fn test_only_attributed_fields_are_kept_in_order() {
        let mut properties = MockPropertyService::new();
        properties.expect_retrieve_properties().returning(|_| {
            Ok(vec![
                FieldDescriptor::attributed(
                    "z",
                    ContentAttribute::text("z"),
                    ContentValue::Text("1".into()),
                ),
                FieldDescriptor::plain("skip", ContentValue::Absent),
                FieldDescriptor::attributed(
                    "a",
                    ContentAttribute::byte_array("a"),
                    ContentValue::Absent,
                ),
            ])
        });

        let fields = ContentPropertyProcessor::new(properties)
            .retrieve_content_properties(&Empty)
            .unwrap();

        let names: Vec<_> = fields.iter().map(|f| f.field.as_str()).collect();
        assert_eq!(names, vec!["z", "a"]);
    }

    #[test]
    fn test_foundation_failures_are_translated() {
        let mut properties = MockPropertyService::new();
        properties.expect_retrieve_properties().returning(|_| {
            let failure = Failure::validation(Layer::Foundation, "bad");
            Err(failure.with_error("f", "x"))
        });

        let failure = ContentPropertyProcessor::new(properties)
            .retrieve_content_properties(&Empty)
            .unwrap_err();

        assert_eq!(failure.layer(), Layer::Processing);
        assert_eq!(failure.category(), Category::DependencyValidation);
        assert_eq!(failure.message(), "bad");
        assert_eq!(failure.inner_failure().map(Failure::layer), Some(Layer::Foundation));
    }
}
