use region_expr::{DimensionMismatchError, InvalidColorError};
use thiserror::Error;

/// Error from turning an image file into a document
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Invalid graph id: {0}")]
    InvalidId(#[from] InvalidIdError),

    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("Invalid color: {0}")]
    InvalidColor(#[from] InvalidColorError),

    #[error("Dimension mismatch: {0}")]
    DimensionMismatch(#[from] DimensionMismatchError),

    #[error("Publish error: {0}")]
    Publish(#[from] PublishError),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// The identifying token handed to the graph service was malformed
#[derive(Debug, Error, PartialEq, Eq)]
#[error("expected exactly {expected} characters, got {found}")]
pub struct InvalidIdError {
    pub expected: usize,
    pub found: usize,
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Debug, Error)]
pub enum PublishError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Service returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected response: {0}")]
    Response(String),
}
