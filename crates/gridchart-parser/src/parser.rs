//! Parser for edge anchor strings.
//!
//! The grammar, read left to right:
//!
//! ```text
//! anchor      := origin dashes destination
//! origin      := [border] [position] ["<"]
//! dashes      := "-" | "--"
//! destination := [">"] [border] [position]
//! border      := "l" | "t" | "r" | "b"        (case-insensitive)
//! position    := number in [0, 1]
//! ```
//!
//! Every part except the dashes is optional, so the plain arrow forms
//! (`"-"`, `"->"`, `"<-->"`) are valid anchor strings. The public entry
//! point is [`parse_anchor_spec`].

use log::trace;
use winnow::{
    Parser as _,
    combinator::opt,
    error::{ContextError, ErrMode},
    token::{any, take_while},
};

use gridchart_core::anchor::{AnchorDescriptor, Border, EndpointAnchor};

use crate::{
    error::{ErrorCode, ParseError, Result},
    span::Span,
};

type Input<'src> = &'src str;
type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Which end of the edge is being parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Origin,
    Destination,
}

/// Parse state over the complete anchor string.
///
/// Winnow parsers advance `rest`; byte offsets into `source` are recovered
/// from the length of what remains.
struct Cursor<'src> {
    source: &'src str,
    rest: Input<'src>,
}

impl<'src> Cursor<'src> {
    fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
        }
    }

    fn offset(&self) -> usize {
        self.source.len() - self.rest.len()
    }

    fn is_eof(&self) -> bool {
        self.rest.is_empty()
    }

    fn error(&self, code: ErrorCode, message: impl Into<String>, span: Span) -> ParseError {
        ParseError::new(code, message, self.source, span)
    }

    /// Span from the cursor to the next dash, or to the end of the input
    fn span_to_dash(&self) -> Span {
        let start = self.offset();
        let len = self.rest.find('-').unwrap_or(self.rest.len());
        Span::new(start..start + len)
    }
}

fn border_letter(input: &mut Input<'_>) -> IResult<Border> {
    any.verify_map(|c: char| Border::try_from(c).ok())
        .parse_next(input)
}

fn position_literal<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1.., |c: char| c.is_ascii_digit() || c == '.').parse_next(input)
}

fn arrow_head(input: &mut Input<'_>, head: char) -> IResult<bool> {
    opt(head).map(|c: Option<char>| c.is_some()).parse_next(input)
}

fn dash_run<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    take_while(1..=2, '-').parse_next(input)
}

/// Parses the optional border letter.
///
/// `opt` only backtracks, so a failure here means winnow hit an
/// unrecoverable state; it is reported as unexpected input.
fn parse_border(cursor: &mut Cursor<'_>) -> Result<Option<Border>> {
    opt(border_letter)
        .parse_next(&mut cursor.rest)
        .map_err(|_| cursor.error(ErrorCode::E103, "unexpected input", cursor.span_to_dash()))
}

/// Parses the optional relative position and checks its range.
fn parse_position(cursor: &mut Cursor<'_>) -> Result<Option<f32>> {
    let start = cursor.offset();
    let literal = opt(position_literal)
        .parse_next(&mut cursor.rest)
        .map_err(|_| cursor.error(ErrorCode::E103, "unexpected input", cursor.span_to_dash()))?;

    let Some(literal) = literal else {
        return Ok(None);
    };
    let span = Span::new(start..start + literal.len());

    let value = literal.parse::<f32>().map_err(|_| {
        cursor.error(
            ErrorCode::E102,
            format!("`{literal}` is not a number"),
            span,
        )
    })?;

    if !(0.0..=1.0).contains(&value) {
        return Err(cursor.error(
            ErrorCode::E102,
            format!("position {literal} is outside the range 0 to 1"),
            span,
        ));
    }

    Ok(Some(value))
}

fn parse_arrow(cursor: &mut Cursor<'_>, head: char) -> Result<bool> {
    arrow_head(&mut cursor.rest, head)
        .map_err(|_| cursor.error(ErrorCode::E103, "unexpected input", cursor.span_to_dash()))
}

/// Error for leftover characters after an endpoint.
///
/// A letter in the border slot of an otherwise empty endpoint is an
/// unknown border; anything else is just out of place.
fn unexpected_input(cursor: &Cursor<'_>, endpoint: &EndpointAnchor, side: Side) -> ParseError {
    let start = cursor.offset();
    let first = cursor.rest.chars().next();

    let border_slot_open = endpoint.border().is_none()
        && endpoint.explicit_position().is_none()
        && (side == Side::Destination || !endpoint.has_arrow());

    match first {
        Some(c) if c.is_alphabetic() && border_slot_open => cursor.error(
            ErrorCode::E101,
            format!("unknown border `{c}`"),
            Span::new(start..start + c.len_utf8()),
        ),
        _ => {
            trace!(side:? = side, offset = start; "Rejected trailing input");
            cursor.error(
                ErrorCode::E103,
                format!("unexpected `{}`", cursor.rest),
                Span::new(start..cursor.source.len()),
            )
        }
    }
}

fn origin(cursor: &mut Cursor<'_>) -> Result<EndpointAnchor> {
    let border = parse_border(cursor)?;
    let position = parse_position(cursor)?;
    let arrow = parse_arrow(cursor, '<')?;
    Ok(EndpointAnchor::new(arrow, border, position))
}

fn destination(cursor: &mut Cursor<'_>) -> Result<EndpointAnchor> {
    let arrow = parse_arrow(cursor, '>')?;
    let border = parse_border(cursor)?;
    let position = parse_position(cursor)?;
    Ok(EndpointAnchor::new(arrow, border, position))
}

/// Consumes the dash run between the endpoints; returns true for dashed edges.
fn dashes(cursor: &mut Cursor<'_>, origin: &EndpointAnchor, expected: usize) -> Result<bool> {
    let run = match dash_run.parse_next(&mut cursor.rest) {
        Ok(run) => run,
        Err(_) => return Err(unexpected_input(cursor, origin, Side::Origin)),
    };

    if run.len() < expected {
        // `t-x-b`: something sits between the two dashes
        return Err(cursor.error(
            ErrorCode::E103,
            "characters between the dashes of a dashed edge",
            cursor.span_to_dash(),
        ));
    }

    Ok(run.len() == 2)
}

/// Checks the dash count up front so that `t---b` reports the count, not
/// the stray third dash.
fn check_dash_count(source: &str) -> Result<usize> {
    let count = source.matches('-').count();
    if count == 1 || count == 2 {
        return Ok(count);
    }

    let span = match (source.find('-'), source.rfind('-')) {
        (Some(first), Some(last)) => Span::new(first..last + 1),
        _ => Span::new(0..source.len()),
    };

    Err(ParseError::new(
        ErrorCode::E100,
        format!("expected 1 or 2 dashes, found {count}"),
        source,
        span,
    ))
}

/// Parse an anchor string into an [`AnchorDescriptor`].
///
/// # Examples
///
/// ```
/// use gridchart_core::anchor::Border;
/// use gridchart_parser::parse_anchor_spec;
///
/// let anchor = parse_anchor_spec("b0.4->t").unwrap();
/// assert!(!anchor.is_dashed());
/// assert_eq!(anchor.origin().border(), Some(Border::Bottom));
/// assert_eq!(anchor.origin().position(), 0.4);
/// assert!(anchor.destination().has_arrow());
///
/// let legacy = parse_anchor_spec("<-->").unwrap();
/// assert!(legacy.is_dashed());
/// assert!(legacy.origin().has_arrow());
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] with code E100 for a wrong dash count, E101 for
/// an unknown border letter, E102 for a bad position and E103 for any other
/// misplaced character.
pub fn parse_anchor_spec(source: &str) -> Result<AnchorDescriptor> {
    let expected_dashes = check_dash_count(source)?;
    let mut cursor = Cursor::new(source);

    let origin = origin(&mut cursor)?;
    let dashed = dashes(&mut cursor, &origin, expected_dashes)?;
    let destination = destination(&mut cursor)?;

    if !cursor.is_eof() {
        return Err(unexpected_input(&cursor, &destination, Side::Destination));
    }

    trace!(source = source, dashed = dashed; "Parsed anchor string");

    Ok(AnchorDescriptor::new(dashed, origin, destination))
}
