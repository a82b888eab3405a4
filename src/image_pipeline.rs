//! Image processing pipeline module
//!
//! BMP decoding and encoding, the raster model the filters work on, the
//! filter engine itself and the driver that chains them together.

pub mod raster;
pub mod bmp;
pub mod filters;
pub mod arguments;
pub mod config;
pub mod timing;
pub mod pipeline;
pub mod common;

pub use common::{
    ProcessingError,
    Result,
};

pub use raster::{
    Pixel,
    Raster,
};

pub use bmp::{
    BmpReader,
    BmpWriter,
    RasterReader,
    RasterWriter,
    decode_file,
    encode_file,
};

pub use filters::{
    Filter,
    FilterRegistry,
};

pub use arguments::{
    CliArguments,
    FilterInvocation,
};

pub use config::{
    PipelineConfig,
    PipelineConfigBuilder,
};

pub use timing::PipelineTimings;

pub use pipeline::ImagePipeline;
