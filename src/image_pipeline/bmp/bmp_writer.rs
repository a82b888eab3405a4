use std::io::Write;
use tracing::debug;

use crate::image_pipeline::bmp::header::{BYTES_PER_PIXEL, BmpHeader, HEADER_SIZE, row_padding};
use crate::image_pipeline::bmp::writer::RasterWriter;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::raster::Raster;

pub struct BmpWriter;

impl RasterWriter for BmpWriter {
    fn write_raster(&self, raster: &Raster, output: &mut dyn Write) -> Result<()> {
        let (height, width) = raster.shape();
        let (horizontal_resolution, vertical_resolution) = raster.resolution();
        debug!("Encoding BMP image: {}x{}", width, height);

        let header = BmpHeader::for_image(height, width, horizontal_resolution, vertical_resolution);
        let padding = [0u8; 3];
        let padding = &padding[..row_padding(width)];

        let mut buffer = Vec::with_capacity(header.file_size as usize);
        buffer.extend_from_slice(&header.to_bytes());

        for row in (0..height).rev() {
            for pixel in raster.row(row) {
                let [r, g, b] = pixel.to_rgb8();
                buffer.extend_from_slice(&[b, g, r]);
            }
            buffer.extend_from_slice(padding);
        }

        debug_assert_eq!(buffer.len(), HEADER_SIZE + height * (BYTES_PER_PIXEL * width + padding.len()));
        output.write_all(&buffer)?;

        debug!("BMP encoding complete, {} bytes", buffer.len());
        Ok(())
    }
}
