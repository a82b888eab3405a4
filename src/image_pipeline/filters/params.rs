//! Parameter checks shared by the filters. Every failure, whether arity,
//! parsing or range, is reported as `InvalidFilterParameters(name)`.

use std::str::FromStr;

use tracing::debug;

use crate::image_pipeline::common::error::{ProcessingError, Result};

pub(crate) fn expect_count(name: &str, parameters: &[String], count: usize) -> Result<()> {
    if parameters.len() != count {
        debug!(
            "{} filter expects {} parameter(s), got {}",
            name,
            count,
            parameters.len()
        );
        return Err(ProcessingError::InvalidFilterParameters(name.to_string()));
    }
    Ok(())
}

pub(crate) fn parse<T: FromStr>(name: &str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| {
        debug!("{} filter: cannot parse parameter {:?}", name, value);
        ProcessingError::InvalidFilterParameters(name.to_string())
    })
}

pub(crate) fn ensure(name: &str, condition: bool) -> Result<()> {
    if condition {
        Ok(())
    } else {
        Err(ProcessingError::InvalidFilterParameters(name.to_string()))
    }
}
