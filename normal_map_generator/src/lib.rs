//! Procedural normal map of a bevelled rectangular panel: a flat top
//! surrounded by four trapezoidal bevels, split diagonally at the corners.
//!
//! The pipeline runs geometry → face normals → pixel bands → three paint
//! passes (flat, bevels, corners), saving the canvas after each pass.

pub mod bands;
pub mod color;
pub mod error;
pub mod geometry;
pub mod normals;
pub mod output;
pub mod params;
pub mod raster;

pub use error::{GeneratorError, Result};
pub use output::{generate_to_dir, OutputOptions};
pub use params::{BevelParams, ZDir};
pub use raster::{Checkpoint, Generator};
