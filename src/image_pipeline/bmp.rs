//! BMP codec module
//!
//! Reads and writes the uncompressed 24-bit bitmap variant with a 54-byte
//! header. Other BMP flavours are rejected.

pub mod header;
mod reader;
mod writer;
mod bmp_reader;
mod bmp_writer;
mod io;


pub use reader::RasterReader;
pub use writer::RasterWriter;
pub use bmp_reader::BmpReader;
pub use bmp_writer::BmpWriter;
pub use io::{create_output_file, decode_file, encode_file, read_input_file, with_input_path};
