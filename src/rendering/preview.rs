use crate::error::ImageError;
use region_expr::{PixelGrid, Rectangle, Rgba};
use std::io::Cursor;

/// Paint rectangles back into a `width x height` grid in image orientation.
///
/// Rectangles use the compressor's bottom-up rows. Later rectangles paint
/// over earlier ones; cells no rectangle touches stay transparent.
pub fn render_rectangles(rectangles: &[Rectangle], width: usize, height: usize) -> PixelGrid {
    let mut grid = PixelGrid::filled(width, height, Rgba::TRANSPARENT);

    for rect in rectangles {
        for y in rect.y..(rect.y + rect.height).min(height) {
            for x in rect.x..(rect.x + rect.width).min(width) {
                grid.set(x, y, rect.color);
            }
        }
    }

    grid.flipped()
}

/// Encode a grid as an 8-bit RGBA PNG
pub fn encode_png(grid: &PixelGrid) -> Result<Vec<u8>, ImageError> {
    if grid.is_empty() {
        return Err(ImageError::UnsupportedDimensions {
            width: grid.width() as u32,
            height: grid.height() as u32,
        });
    }

    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, grid.width() as u32, grid.height() as u32);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(&grid.to_rgba_bytes())
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
