pub mod preview;
pub mod raster;
pub mod thumbnail;

pub use preview::{encode_png, render_rectangles};
pub use raster::{load_png, load_png_file};
pub use thumbnail::to_data_url;
