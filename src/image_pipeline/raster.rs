//! Raster data model
//!
//! Pixels with normalized channels and the grid that holds them.

mod image;
mod pixel;

pub use image::Raster;
pub use pixel::{PIXEL_EPSILON, Pixel};
