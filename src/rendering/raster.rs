use crate::error::ImageError;
use crate::models::CanvasSpec;
use region_expr::PixelGrid;
use std::path::Path;
use tiny_skia::{FilterQuality, Pixmap, PixmapPaint, Transform};

/// Decode a PNG and fit it into `canvas`.
///
/// The image keeps its aspect ratio (contain fit) and is anchored to the
/// left-bottom corner. Uncovered canvas area stays fully transparent, which
/// the compressor treats as empty.
pub fn load_png(data: &[u8], canvas: CanvasSpec) -> Result<PixelGrid, ImageError> {
    let canvas = canvas.validated()?;
    let source = Pixmap::decode_png(data).map_err(|e| ImageError::Decode(e.to_string()))?;

    let pixmap = fit_contain_left_bottom(&source, canvas)?;

    let bytes: Vec<u8> = pixmap
        .pixels()
        .iter()
        .flat_map(|p| {
            let c = p.demultiply();
            [c.red(), c.green(), c.blue(), c.alpha()]
        })
        .collect();

    tracing::debug!(
        source_width = source.width(),
        source_height = source.height(),
        width = canvas.width,
        height = canvas.height,
        "Rasterized source image"
    );

    PixelGrid::from_rgba_bytes(&bytes, canvas.width as usize, canvas.height as usize)
        .map_err(|e| ImageError::Decode(e.to_string()))
}

/// Read a PNG file from disk and fit it into `canvas`
pub fn load_png_file(path: &Path, canvas: CanvasSpec) -> Result<(PixelGrid, Vec<u8>), ImageError> {
    let data = std::fs::read(path)?;
    let grid = load_png(&data, canvas)?;
    Ok((grid, data))
}

fn fit_contain_left_bottom(source: &Pixmap, canvas: CanvasSpec) -> Result<Pixmap, ImageError> {
    let scale_x = canvas.width as f32 / source.width() as f32;
    let scale_y = canvas.height as f32 / source.height() as f32;
    let scale = scale_x.min(scale_y);

    let scaled_height = source.height() as f32 * scale;
    let offset_y = canvas.height as f32 - scaled_height;

    let mut pixmap =
        Pixmap::new(canvas.width, canvas.height).ok_or(ImageError::PixmapAllocation)?;

    // Unscaled sources are copied pixel for pixel
    let quality = if scale == 1.0 {
        FilterQuality::Nearest
    } else {
        FilterQuality::Bicubic
    };
    let paint = PixmapPaint {
        quality,
        ..Default::default()
    };
    let transform = Transform::from_scale(scale, scale).post_translate(0.0, offset_y);
    pixmap.draw_pixmap(0, 0, source.as_ref(), &paint, transform, None);

    Ok(pixmap)
}
