//! In-memory raster the codec produces and the filters transform.

use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::raster::pixel::Pixel;

/// Row-major grid of pixels. Row 0 is the visual top of the image.
///
/// Resolutions are pixels per meter and are only carried through from the
/// decoded file to the encoded one.
#[derive(Debug, Clone, PartialEq)]
pub struct Raster {
    height: usize,
    width: usize,
    horizontal_resolution: u32,
    vertical_resolution: u32,
    pixels: Vec<Pixel>,
}

impl Raster {
    /// Allocates a black raster.
    pub fn new(
        height: usize,
        width: usize,
        horizontal_resolution: u32,
        vertical_resolution: u32,
    ) -> Self {
        Self {
            height,
            width,
            horizontal_resolution,
            vertical_resolution,
            pixels: vec![Pixel::default(); height * width],
        }
    }

    /// Builds a raster from explicit rows. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<Pixel>>) -> Result<Self> {
        let height = rows.len();
        let width = rows.first().map_or(0, Vec::len);

        if let Some(row) = rows.iter().find(|row| row.len() != width) {
            return Err(ProcessingError::InvalidDimensions(row.len(), height));
        }

        Ok(Self {
            height,
            width,
            horizontal_resolution: 0,
            vertical_resolution: 0,
            pixels: rows.into_iter().flatten().collect(),
        })
    }

    /// Black raster with the same shape and resolution, used as the write
    /// target of neighborhood filters.
    pub fn blank_like(&self) -> Self {
        Self::new(
            self.height,
            self.width,
            self.horizontal_resolution,
            self.vertical_resolution,
        )
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// `(height, width)`
    pub fn shape(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    /// `(horizontal, vertical)` in pixels per meter.
    pub fn resolution(&self) -> (u32, u32) {
        (self.horizontal_resolution, self.vertical_resolution)
    }

    pub fn set_resolution(&mut self, horizontal_resolution: u32, vertical_resolution: u32) {
        self.horizontal_resolution = horizontal_resolution;
        self.vertical_resolution = vertical_resolution;
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    #[inline]
    fn clamped_index(&self, row: isize, col: isize) -> usize {
        let row = row.clamp(0, self.height as isize - 1) as usize;
        let col = col.clamp(0, self.width as isize - 1) as usize;
        row * self.width + col
    }

    /// Edge-clamped read: coordinates outside the grid resolve to the
    /// nearest pixel on the border.
    ///
    /// # Panics
    ///
    /// Panics if the raster has no pixels.
    #[inline]
    pub fn get(&self, row: isize, col: isize) -> Pixel {
        self.pixels[self.clamped_index(row, col)]
    }

    /// Edge-clamped mutable access, same addressing as [`Raster::get`].
    #[inline]
    pub fn get_mut(&mut self, row: isize, col: isize) -> &mut Pixel {
        let index = self.clamped_index(row, col);
        &mut self.pixels[index]
    }

    /// Writes one pixel. Unlike reads, writes are not clamped.
    ///
    /// # Panics
    ///
    /// Panics if `(row, col)` lies outside the raster.
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, pixel: Pixel) {
        assert!(
            row < self.height && col < self.width,
            "pixel ({row}, {col}) outside {}x{} raster",
            self.width,
            self.height
        );
        self.pixels[row * self.width + col] = pixel;
    }

    pub fn row(&self, row: usize) -> &[Pixel] {
        &self.pixels[row * self.width..(row + 1) * self.width]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Pixel]> {
        // chunks_exact panics on a zero chunk size
        self.pixels.chunks_exact(self.width.max(1))
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    pub fn pixels_mut(&mut self) -> &mut [Pixel] {
        &mut self.pixels
    }

    /// Changes the logical size, keeping the top-left region. Rows and
    /// columns outside the new size are dropped, new ones are black.
    pub fn reshape(&mut self, new_height: usize, new_width: usize) {
        if (new_height, new_width) == self.shape() {
            return;
        }

        let mut pixels = vec![Pixel::default(); new_height * new_width];
        let keep_rows = new_height.min(self.height);
        let keep_cols = new_width.min(self.width);

        for row in 0..keep_rows {
            let src = &self.pixels[row * self.width..row * self.width + keep_cols];
            pixels[row * new_width..row * new_width + keep_cols].copy_from_slice(src);
        }

        self.height = new_height;
        self.width = new_width;
        self.pixels = pixels;
    }
}
