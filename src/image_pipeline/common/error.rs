use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProcessingError {
    #[error("File not found: {0}")]
    NotFound(String),

    #[error("File couldn't be created: {0}")]
    CreationError(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Invalid program arguments: {0}")]
    InvalidArguments(String),

    #[error("Invalid parameters for {0} filter")]
    InvalidFilterParameters(String),

    #[error("Invalid image dimensions: width={0}, height={1}")]
    InvalidDimensions(usize, usize),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ProcessingError>;
