//! コンテンツ属性の抽出（Broker -> Foundation -> Processing -> Orchestration）
//!
//! 各層は自身の処理を [`LayerGuard`](crate::failure::LayerGuard) で包み、
//! 下位層の失敗を変換規約に従って包み直す。

pub mod broker;
pub mod foundation;
pub mod model;
pub mod orchestration;
pub mod processing;

pub use broker::{BrokerError, DescribeBroker, ReflectionBroker};
pub use foundation::{FoundationPropertyService, PropertyService};
pub use model::{ContentAttribute, ContentPart, ContentSource, ContentValue, FieldDescriptor};
pub use orchestration::ContentOrchestrationService;
pub use processing::{ContentPropertyProcessor, PropertyProcessingService};
