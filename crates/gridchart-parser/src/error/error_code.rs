//! Error codes for anchor string diagnostics.
//!
//! All codes live in the `E1xx` range (parser errors).

use std::fmt;

/// Error codes for categorizing parse failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// Wrong dash count.
    ///
    /// An anchor string must contain exactly one `-` (solid line) or two
    /// `-` (dashed line).
    E100,

    /// Unknown border letter.
    ///
    /// Borders are written `l`, `t`, `r` or `b` (case-insensitive).
    E101,

    /// Invalid position.
    ///
    /// The relative position after a border letter must be a number
    /// between 0 and 1.
    E102,

    /// Unexpected characters.
    ///
    /// Characters were found where none are allowed, e.g. between the two
    /// dashes of a dashed edge or after an origin arrow.
    E103,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "wrong dash count",
            ErrorCode::E101 => "unknown border letter",
            ErrorCode::E102 => "invalid position",
            ErrorCode::E103 => "unexpected characters",
        }
    }

    /// A hint on how to fix the input.
    pub fn help(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "use `-` for a solid edge or `--` for a dashed edge",
            ErrorCode::E101 => "borders are `l`, `t`, `r` or `b`",
            ErrorCode::E102 => "positions are numbers between 0 and 1, e.g. `t0.25`",
            ErrorCode::E103 => "the grammar is `[border][position][<]-[-][>][border][position]`",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
