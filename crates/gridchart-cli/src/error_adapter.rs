//! Error adapter for converting ChartError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI. Anchor string
//! errors are rendered with the failing string as source and a label on the
//! offending characters.

use std::fmt;

use miette::{Diagnostic as MietteDiagnostic, LabeledSpan, SourceSpan};

use gridchart::ChartError;
use gridchart_parser::{error::ParseError, span::Span};

/// Adapter for an anchor string parse error.
pub struct ParseErrorAdapter<'a> {
    err: &'a ParseError,
    /// The anchor string, used for the snippet
    src: &'a str,
}

impl<'a> ParseErrorAdapter<'a> {
    pub fn new(err: &'a ParseError, src: &'a str) -> Self {
        Self { err, src }
    }
}

impl fmt::Debug for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseErrorAdapter")
            .field("err", &self.err)
            .finish()
    }
}

impl fmt::Display for ParseErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid anchor string: {}", self.err.message())
    }
}

impl std::error::Error for ParseErrorAdapter<'_> {}

impl MietteDiagnostic for ParseErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.code()))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(self.err.help()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = span_to_miette(self.err.span());
        let label = LabeledSpan::new_primary_with_span(
            Some(self.err.code().description().to_string()),
            span,
        );
        Some(Box::new(std::iter::once(label)))
    }
}

/// Adapter for non-parse [`ChartError`] variants.
///
/// This adapter handles errors that don't have rich diagnostic information,
/// such as I/O errors, configuration errors, document errors, and export
/// errors.
pub struct ErrorAdapter<'a>(pub &'a ChartError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            ChartError::Io(_) => "gridchart::io",
            ChartError::Parse { .. } => return None,
            ChartError::Configuration(_) => "gridchart::configuration",
            ChartError::Document(_) => "gridchart::document",
            ChartError::Export(_) => "gridchart::export",
        };
        Some(Box::new(code))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parse error with source location information.
    Diagnostic(ParseErrorAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Convert an anchor string [`Span`] to a miette [`SourceSpan`].
fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`ChartError`] into a reportable error.
pub fn to_reportable(err: &ChartError) -> Reportable<'_> {
    match err {
        ChartError::Parse { err: parse_err, src } => {
            Reportable::Diagnostic(ParseErrorAdapter::new(parse_err, src))
        }
        _ => Reportable::Error(ErrorAdapter(err)),
    }
}

#[cfg(test)]
mod tests {
    use gridchart_parser::error::ErrorCode;

    use super::*;

    #[test]
    fn test_parse_error_is_diagnostic() {
        let parse_err = ParseError::new(
            ErrorCode::E101,
            "unknown border letter `x`",
            "x->t",
            Span::new(0..1),
        );
        let err = ChartError::new_parse_error(parse_err, "x->t");

        let reportable = to_reportable(&err);
        assert_eq!(
            reportable.to_string(),
            "invalid anchor string: unknown border letter `x`"
        );
        assert_eq!(reportable.code().unwrap().to_string(), "E101");

        let labels: Vec<_> = reportable.labels().unwrap().collect();
        assert_eq!(labels.len(), 1);
        assert_eq!(labels[0].offset(), 0);
        assert_eq!(labels[0].len(), 1);
        assert!(labels[0].primary());
    }

    #[test]
    fn test_non_parse_error() {
        let err = ChartError::Document("unknown id `db`".to_string());

        let reportable = to_reportable(&err);
        match &reportable {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Document error: unknown id `db`");
                assert_eq!(e.code().unwrap().to_string(), "gridchart::document");
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
        assert!(reportable.labels().is_none());
    }

    #[test]
    fn test_renders_with_graphical_handler() {
        let parse_err = ParseError::new(
            ErrorCode::E102,
            "position `1.5` is outside 0..1",
            "b1.5->t",
            Span::new(1..4),
        );
        let err = ChartError::new_parse_error(parse_err, "b1.5->t");

        let mut out = String::new();
        miette::GraphicalReportHandler::new()
            .render_report(&mut out, &to_reportable(&err))
            .unwrap();
        assert!(out.contains("b1.5->t"));
    }
}
