use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::grayscale::GrayscaleFilter;
use crate::image_pipeline::filters::kernel::{Kernel3, apply_kernel};
use crate::image_pipeline::filters::params::{ensure, expect_count, parse};
use crate::image_pipeline::raster::{Pixel, Raster};

const EDGE_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 4.0, -1.0], [0.0, -1.0, 0.0]];

/// `-edge threshold`: grayscale, Laplacian, then a binary threshold on the
/// red channel of the response. `threshold` must lie in `[0, 1]`.
pub struct EdgeDetectionFilter;

impl Filter for EdgeDetectionFilter {
    fn alias(&self) -> &'static str {
        "-edge"
    }

    fn name(&self) -> &'static str {
        "edge detection"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 1)?;

        let threshold: f64 = parse(self.name(), &parameters[0])?;
        ensure(self.name(), (0.0..=1.0).contains(&threshold))?;
        debug!("Edge detection with threshold {}", threshold);

        GrayscaleFilter::grayscale_in_place(raster);

        let (height, width) = raster.shape();
        let mut edges = raster.blank_like();
        for y in 0..height {
            for x in 0..width {
                let (response, _, _) = apply_kernel(raster, y, x, &EDGE_KERNEL);
                let pixel = if response >= threshold {
                    Pixel::WHITE
                } else {
                    Pixel::BLACK
                };
                edges.set(y, x, pixel);
            }
        }

        *raster = edges;
        Ok(())
    }
}
