//! Decoder for uncompressed 24-bit BMP files.
//!
//! Only the classic layout is accepted: a 14-byte file header, a 40-byte
//! BITMAPINFOHEADER, then bottom-up rows of B,G,R triples padded to four
//! bytes. Anything else is reported as [`ProcessingError::UnsupportedFormat`].

use tracing::debug;

use crate::image_pipeline::bmp::header::{BYTES_PER_PIXEL, BmpHeader, HEADER_SIZE, bitmap_size, row_padding};
use crate::image_pipeline::bmp::reader::RasterReader;
use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::raster::{Pixel, Raster};

/// Reads BMP bytes into a [`Raster`] whose row 0 is the visual top.
pub struct BmpReader;

impl RasterReader for BmpReader {
    /// Decodes a whole BMP file held in memory.
    ///
    /// The declared pixel array is checked against the input length before
    /// the raster is allocated, so a lying header cannot trigger a huge
    /// allocation.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use image_processor_rs::image_pipeline::{BmpReader, RasterReader};
    ///
    /// let bytes = std::fs::read("image.bmp").unwrap();
    /// let raster = BmpReader.read_raster(&bytes).unwrap();
    /// println!("{:?}", raster.shape());
    /// ```
    fn read_raster(&self, data: &[u8]) -> Result<Raster> {
        debug!("Decoding BMP image, {} bytes", data.len());

        let header = BmpHeader::parse(data)?;
        let (height, width) = header.dimensions();

        let pixel_data = &data[HEADER_SIZE..];
        let expected = bitmap_size(height, width);
        if pixel_data.len() < expected {
            return Err(ProcessingError::UnsupportedFormat(format!(
                "truncated pixel data: expected {} bytes, found {}",
                expected,
                pixel_data.len()
            )));
        }

        let mut raster = Raster::new(
            height,
            width,
            header.horizontal_resolution,
            header.vertical_resolution,
        );

        let stride = BYTES_PER_PIXEL * width + row_padding(width);
        if stride > 0 {
            // File rows are stored bottom-up.
            for (file_row, bytes) in pixel_data[..expected].chunks_exact(stride).enumerate() {
                let row = height - file_row - 1;
                for (col, bgr) in bytes[..BYTES_PER_PIXEL * width]
                    .chunks_exact(BYTES_PER_PIXEL)
                    .enumerate()
                {
                    raster.set(row, col, Pixel::from_rgb8(bgr[2], bgr[1], bgr[0]));
                }
            }
        }

        debug!(
            "Decoded image: {}x{}, resolution {}x{}",
            width, height, header.horizontal_resolution, header.vertical_resolution
        );

        Ok(raster)
    }
}
