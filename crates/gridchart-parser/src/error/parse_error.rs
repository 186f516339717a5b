//! The [`ParseError`] type.

use thiserror::Error;

use crate::{error::ErrorCode, span::Span};

/// A malformed anchor string.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("invalid anchor string `{input}`: {message}")]
pub struct ParseError {
    code: ErrorCode,
    message: String,
    input: String,
    span: Span,
}

impl ParseError {
    /// Create a new parse error for `input` with the faulty bytes at `span`.
    pub fn new(code: ErrorCode, message: impl Into<String>, input: &str, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            input: input.to_string(),
            span,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    /// Message describing the failure, without the input
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The complete string that failed to parse
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Byte range of `input` at fault
    pub fn span(&self) -> Span {
        self.span
    }

    /// A hint on how to fix the input.
    pub fn help(&self) -> &'static str {
        self.code.help()
    }
}
