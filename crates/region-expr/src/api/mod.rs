//! Public API: builder and unified error type.

mod builder;
mod error;

pub use builder::RegionSynthesizer;
pub use error::RegionError;
