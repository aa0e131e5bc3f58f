//! Pixel color type and channel validation.

mod error;
mod rgba;

pub use error::InvalidColorError;
pub use rgba::Rgba;
