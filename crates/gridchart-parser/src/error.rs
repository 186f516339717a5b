//! Errors reported by the anchor string parser.
//!
//! Every failure is a [`ParseError`] carrying an [`ErrorCode`], the
//! offending input and the [`Span`] of the bytes at fault, so callers can
//! point at the exact character that broke the string.
//!
//! # Example
//!
//! ```
//! # use gridchart_parser::{parse_anchor_spec, error::ErrorCode};
//! let err = parse_anchor_spec("x->t").unwrap_err();
//! assert_eq!(err.code(), ErrorCode::E101);
//! assert_eq!(err.span().start(), 0);
//! ```

mod error_code;
mod parse_error;

pub use error_code::ErrorCode;
pub use parse_error::ParseError;

/// A type alias for `Result<T, ParseError>`.
pub type Result<T> = std::result::Result<T, ParseError>;
