use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::params::expect_count;
use crate::image_pipeline::raster::Raster;

/// `-neg`: inverts every channel.
pub struct NegativeFilter;

impl Filter for NegativeFilter {
    fn alias(&self) -> &'static str {
        "-neg"
    }

    fn name(&self) -> &'static str {
        "negative"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 0)?;

        for pixel in raster.pixels_mut() {
            let (r, g, b) = pixel.channels();
            pixel.set(1.0 - r, 1.0 - g, 1.0 - b);
        }
        Ok(())
    }
}
