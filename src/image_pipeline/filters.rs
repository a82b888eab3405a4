//! Filter engine
//!
//! Stateless transformations over a [`Raster`](crate::image_pipeline::Raster).
//! Pixel-wise filters work in place; neighborhood filters read the current
//! grid and swap in a freshly built one when the pass is complete.

mod filter;
mod params;
pub mod kernel;
mod crop;
mod grayscale;
mod negative;
mod sharpen;
mod edge_detection;
mod gaussian_blur;
mod registry;

#[cfg(test)]
mod tests;

pub use filter::Filter;
pub use kernel::{Kernel3, apply_kernel};
pub use crop::CropFilter;
pub use grayscale::GrayscaleFilter;
pub use negative::NegativeFilter;
pub use sharpen::SharpenFilter;
pub use edge_detection::EdgeDetectionFilter;
pub use gaussian_blur::GaussianBlurFilter;
pub use registry::FilterRegistry;
