use tracing::debug;

use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::filters::filter::Filter;
use crate::image_pipeline::filters::params::{ensure, expect_count, parse};
use crate::image_pipeline::raster::Raster;

/// `-crop width height`: keeps the top-left `height` x `width` region.
/// Never enlarges the raster.
pub struct CropFilter;

impl Filter for CropFilter {
    fn alias(&self) -> &'static str {
        "-crop"
    }

    fn name(&self) -> &'static str {
        "crop"
    }

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()> {
        expect_count(self.name(), parameters, 2)?;

        let width: i64 = parse(self.name(), &parameters[0])?;
        let height: i64 = parse(self.name(), &parameters[1])?;
        ensure(self.name(), width >= 0 && height >= 0)?;

        let (current_height, current_width) = raster.shape();
        let new_height = current_height.min(usize::try_from(height).unwrap_or(usize::MAX));
        let new_width = current_width.min(usize::try_from(width).unwrap_or(usize::MAX));

        debug!(
            "Cropping {}x{} -> {}x{}",
            current_width, current_height, new_width, new_height
        );
        raster.reshape(new_height, new_width);
        Ok(())
    }
}
