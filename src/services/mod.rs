pub mod pipeline;
pub mod publisher;

pub use pipeline::{Conversion, ConversionPipeline};
pub use publisher::{resolve_hash, GraphPublisher, PublishOutcome};
