//! Common utilities module
//!
//! Error type shared by the codec, the filters and the pipeline.

pub mod error;

pub use error::{ProcessingError, Result};
