pub mod canvas;
pub mod config;
pub mod document;
pub mod graph_hash;

pub use canvas::CanvasSpec;
pub use config::{AppConfig, Compression, PublishConfig};
pub use document::{ExpressionRecord, GraphDocument, SaveRequest, Viewport};
pub use graph_hash::{GraphHash, GRAPH_HASH_LEN};
