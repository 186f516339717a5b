//! Error types for gridchart operations.
//!
//! Every failure surfaces synchronously from the call that declared the
//! offending element, so a diagram is either fully valid or rejected.

use std::io;

use thiserror::Error;

use gridchart_parser::error::ParseError;

/// The main error type for gridchart operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the anchor string that failed next to the
/// structured parser error, so reporters can point at the exact character.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Document error: {0}")]
    Document(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ChartError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ChartError {
    /// Create a new `Parse` error with the anchor string that failed.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
