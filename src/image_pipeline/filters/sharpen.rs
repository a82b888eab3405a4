use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::kernel::{Kernel3, apply_kernel};
use crate::image_pipeline::filters::params::expect_count;
use crate::image_pipeline::raster::{Pixel, Raster};

const SHARPEN_KERNEL: Kernel3 = [[0.0, -1.0, 0.0], [-1.0, 5.0, -1.0], [0.0, -1.0, 0.0]];

/// `-sharp`: 3×3 sharpening convolution.
pub struct SharpenFilter;

impl Filter for SharpenFilter {
    fn alias(&self) -> &'static str {
        "-sharp"
    }

    fn name(&self) -> &'static str {
        "sharpening"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 0)?;

        let (height, width) = raster.shape();
        let mut sharpened = raster.blank_like();
        for y in 0..height {
            for x in 0..width {
                sharpened.set(y, x, Pixel::from(apply_kernel(raster, y, x, &SHARPEN_KERNEL)));
            }
        }

        *raster = sharpened;
        Ok(())
    }
}
