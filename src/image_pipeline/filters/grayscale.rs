use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::params::expect_count;
use crate::image_pipeline::raster::{Pixel, Raster};

/// Luma weights for red, green and blue.
const LUMA_COEFFICIENTS: (f64, f64, f64) = (0.299, 0.587, 0.114);

/// `-gs`: replaces every channel with the pixel's luminance.
pub struct GrayscaleFilter;

impl GrayscaleFilter {
    pub(crate) fn grayscale_in_place(raster: &mut Raster) {
        for pixel in raster.pixels_mut() {
            let (r, g, b) = (*pixel * LUMA_COEFFICIENTS).channels();
            let luminance = r + g + b;
            *pixel = Pixel::new(luminance, luminance, luminance);
        }
    }
}

impl Filter for GrayscaleFilter {
    fn alias(&self) -> &'static str {
        "-gs"
    }

    fn name(&self) -> &'static str {
        "grayscale"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 0)?;
        Self::grayscale_in_place(raster);
        Ok(())
    }
}
