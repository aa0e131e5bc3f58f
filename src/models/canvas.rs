use crate::error::ImageError;
use serde::Deserialize;

/// Target raster size the source image is fitted into before compression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
}

impl CanvasSpec {
    /// 125x125, the historical output size
    pub const DEFAULT: Self = Self {
        width: 125,
        height: 125,
    };

    /// Largest accepted side. At 0.1 graph units per pixel this already spans
    /// the whole default viewport; larger canvases only bloat the document.
    pub const MAX_SIDE: u32 = 2048;

    /// Validate requested dimensions
    pub fn from_dimensions(width: u32, height: u32) -> Result<Self, ImageError> {
        match (width, height) {
            (0, _) | (_, 0) => Err(ImageError::UnsupportedDimensions { width, height }),
            (w, h) if w > Self::MAX_SIDE || h > Self::MAX_SIDE => {
                Err(ImageError::UnsupportedDimensions { width, height })
            }
            _ => Ok(Self { width, height }),
        }
    }

    /// Re-run validation on dimensions that came from config
    pub fn validated(self) -> Result<Self, ImageError> {
        Self::from_dimensions(self.width, self.height)
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self::DEFAULT
    }
}
