//! Command-line tokenizer
//!
//! `<input> <output> [-filter [param ...]] ...`: every token starting with
//! `-` opens a new filter group and the tokens after it are its parameters.

use std::path::PathBuf;

use crate::image_pipeline::common::error::{ProcessingError, Result};

pub const USAGE: &str = "usage: image_processor <input.bmp> <output.bmp> \
[-<filter 1> [param 1] [param 2] ...] [-<filter 2> [param 1] ...] ...\n\
filters: -crop width height | -gs | -neg | -sharp | -edge threshold | -blur sigma";

/// One filter alias with its parameters, in command-line order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterInvocation {
    pub alias: String,
    pub parameters: Vec<String>,
}

impl FilterInvocation {
    pub fn new(alias: impl Into<String>, parameters: &[&str]) -> Self {
        Self {
            alias: alias.into(),
            parameters: parameters.iter().map(|p| p.to_string()).collect(),
        }
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliArguments {
    pub input: PathBuf,
    pub output: PathBuf,
    pub filters: Vec<FilterInvocation>,
}

impl CliArguments {
    /// Parses arguments without the program name. Returns `Ok(None)` when
    /// the two paths are missing, which callers answer with [`USAGE`].
    pub fn parse<I, S>(args: I) -> Result<Option<Self>>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let [input, output, rest @ ..] = args.as_slice() else {
            return Ok(None);
        };

        Ok(Some(Self {
            input: PathBuf::from(input),
            output: PathBuf::from(output),
            filters: parse_filter_groups(rest)?,
        }))
    }
}

/// Splits filter tokens into groups. A parameter before any filter alias is
/// an `InvalidArguments` error; unknown aliases are left for the registry.
pub fn parse_filter_groups<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<FilterInvocation>> {
    let mut groups: Vec<FilterInvocation> = Vec::new();

    for token in tokens {
        let token = token.as_ref();
        if token.starts_with('-') {
            groups.push(FilterInvocation {
                alias: token.to_string(),
                parameters: Vec::new(),
            });
        } else {
            match groups.last_mut() {
                Some(group) => group.parameters.push(token.to_string()),
                None => {
                    return Err(ProcessingError::InvalidArguments(format!(
                        "parameter {:?} given before any filter",
                        token
                    )));
                }
            }
        }
    }

    Ok(groups)
}
