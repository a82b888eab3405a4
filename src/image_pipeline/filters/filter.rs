use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::Raster;

/// A transformation applied to a raster with its command-line parameters.
pub trait Filter {
    /// Command-line token selecting the filter, e.g. `-blur`.
    fn alias(&self) -> &'static str;

    /// Name reported in `InvalidFilterParameters` errors.
    fn name(&self) -> &'static str;

    fn apply(&self, raster: &mut Raster, parameters: &[String]) -> Result<()>;
}
