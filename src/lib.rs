//! Pixgraph - raster images as graphing-calculator region expressions
//!
//! Loads a PNG, compresses its pixels into same-colored rectangles with
//! [`region_expr`], and wraps the resulting inequalities in a calculator
//! state document that can be written to disk or saved to the service.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
