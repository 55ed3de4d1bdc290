use std::error::Error as StdError;
use std::fmt;

use super::*;

#[derive(Debug)]
struct StorageError(&'static str);

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "storage failure: {}", self.0)
    }
}

impl StdError for StorageError {}

const FOUNDATION: LayerGuard = LayerGuard::new(Layer::Foundation);
const PROCESSING: LayerGuard = LayerGuard::new(Layer::Processing);
const ORCHESTRATION: LayerGuard = LayerGuard::new(Layer::Orchestration);

fn invalid_foundation_failure() -> Failure {
    Failure::validation(Layer::Foundation, "Invalid property, fix the errors and try again.")
        .with_error("name", "required")
        .with_error("age", "must be positive")
        .with_error("age", "must be integer")
}

fn categorized(layer: Layer, category: Category) -> Failure {
    let base = invalid_foundation_failure();
    match category {
        Category::Validation => Failure::validation(layer, "invalid").with_error("id", "required"),
        other => Failure::wrap(layer, other, base),
    }
}

#[test]
fn test_success_passes_value_through() {
    let result: Result<Vec<i32>, Failure> =
        PROCESSING.try_catch(|| Ok::<_, Failure>(vec![1, 2, 3]));
    assert_eq!(result.unwrap(), vec![1, 2, 3]);
}

#[test]
fn test_own_layer_validation_is_not_rewrapped() {
    let failure = PROCESSING
        .try_catch(|| -> Result<(), Failure> {
            Err(Failure::validation(Layer::Processing, "bad input").with_error("name", "required"))
        })
        .unwrap_err();

    assert_eq!(failure.layer(), Layer::Processing);
    assert_eq!(failure.category(), Category::Validation);
    assert!(failure.inner_cause().is_none());
    assert_eq!(failure.errors().get("name"), Some(&["required".to_string()][..]));
}

#[test]
fn test_rewrap_category_rule() {
    let cases = [
        (Category::Validation, Category::DependencyValidation),
        (Category::DependencyValidation, Category::DependencyValidation),
        (Category::Dependency, Category::Dependency),
        (Category::Service, Category::Dependency),
    ];

    for (inner_category, expected) in cases {
        let inner = || categorized(Layer::Foundation, inner_category);
        let failure = PROCESSING
            .try_catch(|| -> Result<(), Failure> { Err(inner()) })
            .unwrap_err();

        assert_eq!(failure.layer(), Layer::Processing);
        assert_eq!(failure.category(), expected, "inner category {}", inner_category);
        assert_eq!(failure.inner_failure().map(Failure::category), Some(inner_category));
    }
}

#[test]
fn test_uncategorized_error_becomes_service() {
    let failure = FOUNDATION
        .try_catch(|| -> Result<(), StorageError> { Err(StorageError("disk full")) })
        .unwrap_err();

    assert_eq!(failure.layer(), Layer::Foundation);
    assert_eq!(failure.category(), Category::Service);
    assert_eq!(failure.message(), "storage failure: disk full");
    assert!(failure.errors().is_empty());
    assert!(failure.inner_failure().is_none());
    let cause = failure.inner_cause().unwrap();
    assert!(cause.downcast_ref::<StorageError>().is_some());
    assert!(!failure.is_caller_fault());
}

#[test]
fn test_string_errors_become_service() {
    let failure = ORCHESTRATION
        .try_catch(|| -> Result<(), String> { Err("unexpected".to_string()) })
        .unwrap_err();

    assert_eq!(failure.category(), Category::Service);
    assert_eq!(failure.message(), "unexpected");
}

#[test]
fn test_rewrap_preserves_cause_chain_and_errors() {
    let failure = PROCESSING
        .try_catch(|| -> Result<(), Failure> { Err(invalid_foundation_failure()) })
        .unwrap_err();

    let inner = failure.inner_failure().expect("inner failure");
    assert_eq!(inner.layer(), Layer::Foundation);
    assert_eq!(inner.category(), Category::Validation);
    assert_eq!(inner.message(), failure.message());
    assert_eq!(inner.errors(), failure.errors());
    assert_eq!(
        failure.errors().get("age"),
        Some(&["must be positive".to_string(), "must be integer".to_string()][..])
    );
}

#[test]
fn test_three_tier_propagation() {
    let failure = ORCHESTRATION
        .try_catch(|| {
            PROCESSING.try_catch(|| {
                FOUNDATION
                    .try_catch(|| -> Result<(), Failure> { Err(invalid_foundation_failure()) })
            })
        })
        .unwrap_err();

    assert_eq!(failure.layer(), Layer::Orchestration);
    assert_eq!(failure.category(), Category::DependencyValidation);
    assert!(failure.is_caller_fault());
    assert_eq!(failure.root_category(), Category::Validation);
    assert_eq!(failure.root_failure().layer(), Layer::Foundation);
    assert_eq!(failure.errors(), invalid_foundation_failure().errors());

    let processing = failure.inner_failure().unwrap();
    assert_eq!(processing.layer(), Layer::Processing);
    assert_eq!(processing.category(), Category::DependencyValidation);
}

#[test]
fn test_internal_fault_stays_internal_across_layers() {
    let failure = ORCHESTRATION
        .try_catch(|| {
            PROCESSING.try_catch(|| {
                FOUNDATION
                    .try_catch(|| -> Result<(), StorageError> { Err(StorageError("timeout")) })
            })
        })
        .unwrap_err();

    assert_eq!(failure.category(), Category::Dependency);
    assert!(!failure.is_caller_fault());
    assert_eq!(failure.root_category(), Category::Service);
    assert_eq!(failure.root_cause().to_string(), "storage failure: timeout");
}

#[test]
fn test_source_chain_reaches_original() {
    let failure = PROCESSING.translate(Box::new(invalid_foundation_failure()));
    let source = failure.source().expect("source");
    let original = source.downcast_ref::<Failure>().unwrap();
    assert_eq!(original.layer(), Layer::Foundation);
}

#[test]
fn test_message_override_keeps_errors() {
    let message = "Property dependency validation error occurred, fix the errors and try again.";
    let failure = Failure::dependency_validation(Layer::Processing, invalid_foundation_failure())
        .with_message(message);

    assert_eq!(failure.message(), message);
    assert_eq!(failure.errors(), invalid_foundation_failure().errors());
}

#[test]
fn test_throw_if_contains_errors() {
    let clean = Failure::validation(Layer::Foundation, "Invalid property");
    assert!(clean.throw_if_contains_errors().is_ok());

    let mut dirty = Failure::validation(Layer::Foundation, "Invalid property");
    dirty.add_error("name", "required");
    let raised = dirty.throw_if_contains_errors().unwrap_err();
    assert_eq!(raised.errors().len(), 1);
}

#[test]
fn test_service_wrapping_a_failure_keeps_errors() {
    let inner = Failure::validation(Layer::Foundation, "bad").with_error("name", "required");

    let failure = Failure::service(Layer::Processing, inner);

    assert_eq!(failure.category(), Category::Service);
    assert_eq!(failure.message(), "bad");
    assert_eq!(failure.errors().get("name"), Some(&["required".to_string()][..]));
    assert_eq!(failure.inner_failure().map(Failure::layer), Some(Layer::Foundation));
}

#[tokio::test]
async fn test_try_catch_async_applies_same_rule() {
    let ok = PROCESSING
        .try_catch_async(async { Ok::<_, Failure>("done") })
        .await;
    assert_eq!(ok.unwrap(), "done");

    let failure = PROCESSING
        .try_catch_async(async { Err::<(), _>(categorized(Layer::Foundation, Category::Service)) })
        .await
        .unwrap_err();
    assert_eq!(failure.category(), Category::Dependency);

    let failure = PROCESSING
        .try_catch_async(async { Err::<(), _>(StorageError("offline")) })
        .await
        .unwrap_err();
    assert_eq!(failure.category(), Category::Service);
}
