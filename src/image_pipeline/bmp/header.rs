//! BMP file header and BITMAPINFOHEADER layout.
//!
//! Offsets are absolute from the start of the file. Every multi-byte field
//! is little-endian and goes through [`read_le`] / [`write_le`].

use crate::image_pipeline::common::error::{ProcessingError, Result};

pub const FILE_HEADER_SIZE: usize = 14;
pub const DIB_HEADER_SIZE: usize = 40;
pub const HEADER_SIZE: usize = FILE_HEADER_SIZE + DIB_HEADER_SIZE;

pub const MAGIC: [u8; 2] = *b"BM";
/// Detail of the error raised when the file does not start with [`MAGIC`].
pub const MISSING_SIGNATURE: &str = "missing BM signature";
pub const BITS_PER_PIXEL: u16 = 24;
pub const BYTES_PER_PIXEL: usize = 3;

const FILE_SIZE_OFFSET: usize = 2;
const RESERVED_OFFSET: usize = 6;
const BITMAP_OFFSET_OFFSET: usize = 10;
const DIB_SIZE_OFFSET: usize = 14;
const WIDTH_OFFSET: usize = 18;
const HEIGHT_OFFSET: usize = 22;
const COLOR_PLANES_OFFSET: usize = 26;
const COLOR_DEPTH_OFFSET: usize = 28;
const COMPRESSION_OFFSET: usize = 30;
const BITMAP_SIZE_OFFSET: usize = 34;
const HORIZONTAL_RESOLUTION_OFFSET: usize = 38;
const VERTICAL_RESOLUTION_OFFSET: usize = 42;
const PALETTE_SIZE_OFFSET: usize = 46;
const IMPORTANT_COLORS_OFFSET: usize = 50;

/// Reads `length` bytes starting at `start`, least significant byte first.
pub fn read_le(bytes: &[u8], start: usize, length: usize) -> u32 {
    bytes[start..start + length]
        .iter()
        .enumerate()
        .fold(0u32, |acc, (i, &byte)| acc | (u32::from(byte) << (8 * i)))
}

/// Writes the low `length` bytes of `value` starting at `start`,
/// least significant byte first.
pub fn write_le(bytes: &mut [u8], value: u32, start: usize, length: usize) {
    for (i, byte) in bytes[start..start + length].iter_mut().enumerate() {
        *byte = (value >> (8 * i)) as u8;
    }
}

/// Zero bytes appended to each pixel row so it spans a multiple of 4 bytes.
pub fn row_padding(width: usize) -> usize {
    (4 - (BYTES_PER_PIXEL * width) % 4) % 4
}

/// Size in bytes of the padded pixel array.
pub fn bitmap_size(height: usize, width: usize) -> usize {
    height * (BYTES_PER_PIXEL * width + row_padding(width))
}

/// Decoded header fields of a 24-bit uncompressed bitmap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BmpHeader {
    pub file_size: u32,
    pub bitmap_offset: u32,
    pub dib_header_size: u32,
    pub width: i32,
    pub height: i32,
    pub color_planes: u16,
    pub color_depth: u16,
    pub compression: u32,
    pub bitmap_size: u32,
    pub horizontal_resolution: u32,
    pub vertical_resolution: u32,
    pub palette_size: u32,
    pub important_colors: u32,
}

impl BmpHeader {
    /// Header describing a `height` x `width` 24-bit image.
    pub fn for_image(
        height: usize,
        width: usize,
        horizontal_resolution: u32,
        vertical_resolution: u32,
    ) -> Self {
        let bitmap_size = bitmap_size(height, width) as u32;
        Self {
            file_size: HEADER_SIZE as u32 + bitmap_size,
            bitmap_offset: HEADER_SIZE as u32,
            dib_header_size: DIB_HEADER_SIZE as u32,
            width: width as i32,
            height: height as i32,
            color_planes: 1,
            color_depth: BITS_PER_PIXEL,
            compression: 0,
            bitmap_size,
            horizontal_resolution,
            vertical_resolution,
            palette_size: 0,
            important_colors: 0,
        }
    }

    /// Parses and validates the 54-byte header at the start of `data`.
    pub fn parse(data: &[u8]) -> Result<Self> {
        if data.len() < FILE_HEADER_SIZE {
            return Err(ProcessingError::UnsupportedFormat(
                "truncated file header".to_string(),
            ));
        }
        if data[..2] != MAGIC {
            return Err(ProcessingError::UnsupportedFormat(
                MISSING_SIGNATURE.to_string(),
            ));
        }

        let bitmap_offset = read_le(data, BITMAP_OFFSET_OFFSET, 4);
        if bitmap_offset as usize != HEADER_SIZE {
            return Err(ProcessingError::UnsupportedFormat(
                "not 54-byte header".to_string(),
            ));
        }
        if data.len() < HEADER_SIZE {
            return Err(ProcessingError::UnsupportedFormat(
                "truncated information header".to_string(),
            ));
        }

        let header = Self {
            file_size: read_le(data, FILE_SIZE_OFFSET, 4),
            bitmap_offset,
            dib_header_size: read_le(data, DIB_SIZE_OFFSET, 4),
            width: read_le(data, WIDTH_OFFSET, 4) as i32,
            height: read_le(data, HEIGHT_OFFSET, 4) as i32,
            color_planes: read_le(data, COLOR_PLANES_OFFSET, 2) as u16,
            color_depth: read_le(data, COLOR_DEPTH_OFFSET, 2) as u16,
            compression: read_le(data, COMPRESSION_OFFSET, 4),
            bitmap_size: read_le(data, BITMAP_SIZE_OFFSET, 4),
            horizontal_resolution: read_le(data, HORIZONTAL_RESOLUTION_OFFSET, 4),
            vertical_resolution: read_le(data, VERTICAL_RESOLUTION_OFFSET, 4),
            palette_size: read_le(data, PALETTE_SIZE_OFFSET, 4),
            important_colors: read_le(data, IMPORTANT_COLORS_OFFSET, 4),
        };
        header.validate()?;
        Ok(header)
    }

    fn validate(&self) -> Result<()> {
        if self.dib_header_size as usize != DIB_HEADER_SIZE {
            return Err(ProcessingError::UnsupportedFormat(
                "not 54-byte header".to_string(),
            ));
        }
        if self.color_depth != BITS_PER_PIXEL {
            return Err(ProcessingError::UnsupportedFormat(format!(
                "{} bits color",
                self.color_depth
            )));
        }
        if self.compression != 0 {
            return Err(ProcessingError::UnsupportedFormat(format!(
                "compression {}",
                self.compression
            )));
        }
        if self.width < 0 || self.height < 0 {
            return Err(ProcessingError::UnsupportedFormat(format!(
                "negative dimensions {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.height as usize, self.width as usize)
    }

    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut bytes = [0u8; HEADER_SIZE];
        bytes[..2].copy_from_slice(&MAGIC);
        write_le(&mut bytes, self.file_size, FILE_SIZE_OFFSET, 4);
        write_le(&mut bytes, 0, RESERVED_OFFSET, 4);
        write_le(&mut bytes, self.bitmap_offset, BITMAP_OFFSET_OFFSET, 4);
        write_le(&mut bytes, self.dib_header_size, DIB_SIZE_OFFSET, 4);
        write_le(&mut bytes, self.width as u32, WIDTH_OFFSET, 4);
        write_le(&mut bytes, self.height as u32, HEIGHT_OFFSET, 4);
        write_le(&mut bytes, u32::from(self.color_planes), COLOR_PLANES_OFFSET, 2);
        write_le(&mut bytes, u32::from(self.color_depth), COLOR_DEPTH_OFFSET, 2);
        write_le(&mut bytes, self.compression, COMPRESSION_OFFSET, 4);
        write_le(&mut bytes, self.bitmap_size, BITMAP_SIZE_OFFSET, 4);
        write_le(&mut bytes, self.horizontal_resolution, HORIZONTAL_RESOLUTION_OFFSET, 4);
        write_le(&mut bytes, self.vertical_resolution, VERTICAL_RESOLUTION_OFFSET, 4);
        write_le(&mut bytes, self.palette_size, PALETTE_SIZE_OFFSET, 4);
        write_le(&mut bytes, self.important_colors, IMPORTANT_COLORS_OFFSET, 4);
        bytes
    }
}
