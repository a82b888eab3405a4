//! File-level entry points of the codec.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use tracing::instrument;

use crate::image_pipeline::bmp::bmp_reader::BmpReader;
use crate::image_pipeline::bmp::bmp_writer::BmpWriter;
use crate::image_pipeline::bmp::header::MISSING_SIGNATURE;
use crate::image_pipeline::bmp::reader::RasterReader;
use crate::image_pipeline::bmp::writer::RasterWriter;
use crate::image_pipeline::common::error::{ProcessingError, Result};
use crate::image_pipeline::raster::Raster;

/// Reads the whole input file, mapping any open/read failure to `NotFound`.
pub fn read_input_file(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path)
        .map_err(|e| ProcessingError::NotFound(format!("{}: {}", path.display(), e)))
}

/// Creates (or truncates) the output file, mapping failure to `CreationError`.
pub fn create_output_file(path: &Path) -> Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|e| ProcessingError::CreationError(format!("{}: {}", path.display(), e)))
}

/// Decodes the BMP file at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn decode_file<P: AsRef<Path>>(path: P) -> Result<Raster> {
    let path = path.as_ref();
    let data = read_input_file(path)?;

    BmpReader
        .read_raster(&data)
        .map_err(|e| with_input_path(e, path))
}

/// A file without the BM signature is reported by its path. Every other
/// error keeps its own detail.
pub fn with_input_path(err: ProcessingError, path: &Path) -> ProcessingError {
    match err {
        ProcessingError::UnsupportedFormat(detail) if detail == MISSING_SIGNATURE => {
            ProcessingError::UnsupportedFormat(format!("{}: {}", path.display(), detail))
        }
        other => other,
    }
}

/// Encodes `raster` as a 24-bit BMP at `path`.
#[instrument(skip_all, fields(path = %path.as_ref().display()))]
pub fn encode_file<P: AsRef<Path>>(path: P, raster: &Raster) -> Result<()> {
    let mut output = create_output_file(path.as_ref())?;
    BmpWriter.write_raster(raster, &mut output)?;
    output.flush()?;
    Ok(())
}
