//! Parser for gridchart edge anchor strings.
//!
//! An anchor string describes how an edge attaches to its two endpoints:
//! which border of each node it leaves from, where along that border,
//! whether the line is dashed, and which ends carry arrowheads.
//!
//! ```
//! use gridchart_core::anchor::Border;
//! use gridchart_parser::parse_anchor_spec;
//!
//! let anchor = parse_anchor_spec("t-->r0.3").unwrap();
//! assert!(anchor.is_dashed());
//! assert_eq!(anchor.destination().border(), Some(Border::Right));
//! ```

pub mod error;
mod parser;
pub mod span;


pub use parser::parse_anchor_spec;
