use std::path::Path;

use region_expr::{synthesize, PixelGrid, Rectangle, RegionSynthesizer};

use crate::error::{ImageError, PipelineError};
use crate::models::{AppConfig, CanvasSpec, GraphDocument, GraphHash, SaveRequest};
use crate::rendering;

/// Output of converting one image
#[derive(Debug, Clone)]
pub struct Conversion {
    /// Source PNG bytes, used for the thumbnail
    pub source_png: Vec<u8>,
    /// Source fitted into the canvas, image orientation
    pub grid: PixelGrid,
    /// Rectangles in bottom-up grid coordinates
    pub rectangles: Vec<Rectangle>,
    pub document: GraphDocument,
}

impl Conversion {
    /// Rasterize the rectangles back into a PNG of the canvas size
    pub fn preview_png(&self) -> Result<Vec<u8>, ImageError> {
        let grid = rendering::render_rectangles(
            &self.rectangles,
            self.grid.width(),
            self.grid.height(),
        );
        rendering::encode_png(&grid)
    }

    /// Build the form body for saving this document under `graph_hash`
    pub fn save_request(
        &self,
        graph_hash: GraphHash,
        lang: &str,
    ) -> Result<SaveRequest, PipelineError> {
        let thumb = rendering::to_data_url(&self.source_png);
        Ok(SaveRequest::new(&self.document, graph_hash, thumb, lang)?)
    }
}

/// Pipeline that orchestrates load → quantize → compress → synthesize → document
pub struct ConversionPipeline {
    config: AppConfig,
}

impl ConversionPipeline {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    fn synthesizer(&self) -> RegionSynthesizer {
        RegionSynthesizer::new()
            .precision(self.config.precision())
            .mode(self.config.compress_mode())
    }

    /// Convert a PNG file on disk
    pub fn convert_file(&self, path: &Path) -> Result<Conversion, PipelineError> {
        let data = std::fs::read(path).map_err(ImageError::from)?;
        tracing::info!(path = %path.display(), bytes = data.len(), "Read source image");
        self.convert_png(data)
    }

    /// Convert PNG bytes
    pub fn convert_png(&self, source_png: Vec<u8>) -> Result<Conversion, PipelineError> {
        let canvas: CanvasSpec = self.config.size;
        let grid = rendering::load_png(&source_png, canvas)?;
        let mut conversion = self.convert_grid(grid)?;
        conversion.source_png = source_png;
        Ok(conversion)
    }

    /// Convert an already decoded grid
    pub fn convert_grid(&self, grid: PixelGrid) -> Result<Conversion, PipelineError> {
        let start = std::time::Instant::now();

        let rectangles = self.synthesizer().rectangles(&grid);
        let expressions = synthesize(&rectangles);
        let document = GraphDocument::new(&expressions, self.config.viewport);

        let non_empty = grid.pixels().iter().filter(|p| !p.is_empty()).count();
        tracing::info!(
            width = grid.width(),
            height = grid.height(),
            pixels = non_empty,
            rectangles = rectangles.len(),
            mode = ?self.config.mode,
            precision = ?self.config.precision,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "Synthesized region expressions"
        );

        Ok(Conversion {
            source_png: Vec::new(),
            grid,
            rectangles,
            document,
        })
    }
}
