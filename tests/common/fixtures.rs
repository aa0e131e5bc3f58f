//! Test fixtures: PNG files written into temporary directories.

use std::path::{Path, PathBuf};

use tempfile::TempDir;

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];
pub const CLEAR: [u8; 4] = [0, 0, 0, 0];

/// Graph hash accepted by the service
pub const GRAPH_HASH: &str = "abcdefghij";

/// Encode row-major RGBA pixels as a PNG
pub fn png_bytes(width: u32, height: u32, pixels: &[[u8; 4]]) -> Vec<u8> {
    assert_eq!(pixels.len(), (width * height) as usize, "pixel count mismatch");

    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().expect("PNG header");
        let data: Vec<u8> = pixels.iter().flatten().copied().collect();
        writer.write_image_data(&data).expect("PNG data");
    }
    buf
}

/// Single-color PNG
pub fn solid_png(width: u32, height: u32, color: [u8; 4]) -> Vec<u8> {
    png_bytes(width, height, &vec![color; (width * height) as usize])
}

/// Temporary directory holding source images
pub struct FixtureDir {
    pub dir: TempDir,
}

impl FixtureDir {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Write PNG bytes under `name` and return the full path
    pub fn write_png(&self, name: &str, data: &[u8]) -> PathBuf {
        let path = self.dir.path().join(name);
        std::fs::write(&path, data).expect("Failed to write fixture");
        path
    }
}
