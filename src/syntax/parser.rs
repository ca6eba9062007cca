//! Scalar JSON Parser - recursive descent over a single forward-only cursor.
//!
//! Entry skips leading whitespace, dispatches on the lookahead byte to the literal
//! matcher or the number recognizer, skips trailing whitespace and finally requires
//! that the whole input was consumed. No stage advances the cursor on a failing path.

use tracing::{debug, trace};

use crate::diagnostics::{ErrorKind, ParseError, ParseStatus};
use crate::syntax::cursor::Cursor;
use crate::syntax::Span;
use crate::value::Value;

// ============================================================================
// PUBLIC API
// ============================================================================

/// Parses `json` into the `value` slot and reports the outcome.
///
/// The slot is overwritten unconditionally: it holds the parsed value on
/// [`ParseStatus::Ok`] and [`Value::Null`] on every failure.
///
/// # Examples
///
/// ```rust
/// use scalar_json::{parse, ParseStatus, Value};
///
/// let mut value = Value::Number(1.0);
/// assert_eq!(parse(&mut value, "true"), ParseStatus::Ok);
/// assert_eq!(value, Value::True);
///
/// assert_eq!(parse(&mut value, "1 2"), ParseStatus::RootNotSingular);
/// assert_eq!(value, Value::Null);
/// ```
pub fn parse(value: &mut Value, json: &str) -> ParseStatus {
    match parse_document(json) {
        Ok(parsed) => {
            *value = parsed;
            ParseStatus::Ok
        }
        Err(failure) => {
            *value = Value::Null;
            failure.kind.into()
        }
    }
}

/// Parses `json` into a [`Value`], reporting failures as a located [`ParseError`].
///
/// # Examples
///
/// ```rust
/// use scalar_json::{parse_value, ParseStatus, Value};
///
/// assert_eq!(parse_value("-0.25").unwrap(), Value::Number(-0.25));
///
/// let err = parse_value("1e400").unwrap_err();
/// assert_eq!(err.status(), ParseStatus::NumberTooBig);
/// ```
pub fn parse_value(json: &str) -> Result<Value, ParseError> {
    parse_document(json).map_err(|failure| ParseError::new(failure.kind, json, failure.span))
}

// ============================================================================
// DISPATCH
// ============================================================================

/// Where and why a parse stopped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Failure {
    pub(crate) kind: ErrorKind,
    pub(crate) span: Span,
}

impl Failure {
    fn new(kind: ErrorKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// An invalid token starting at `start` that stopped matching `offset` bytes in.
    /// The span takes in the whole character that failed to match.
    fn invalid(cursor: &Cursor<'_>, start: usize, offset: usize) -> Self {
        let end = cursor.char_end(start + offset);
        Self::new(ErrorKind::InvalidValue, Span::new(start, end))
    }
}

fn parse_document(json: &str) -> Result<Value, Failure> {
    trace!(len = json.len(), "parsing scalar json");
    let mut cursor = Cursor::new(json);

    cursor.skip_whitespace();
    let result = parse_element(&mut cursor).and_then(|value| {
        cursor.skip_whitespace();
        if cursor.is_at_end() {
            Ok(value)
        } else {
            Err(Failure::new(
                ErrorKind::RootNotSingular,
                Span::new(cursor.pos(), json.len()),
            ))
        }
    });

    if let Err(failure) = &result {
        debug!(
            status = %ParseStatus::from(failure.kind),
            start = failure.span.start,
            end = failure.span.end,
            "scalar json parse failed"
        );
    }
    result
}

fn parse_element(cursor: &mut Cursor<'_>) -> Result<Value, Failure> {
    match cursor.peek() {
        None => Err(Failure::new(
            ErrorKind::ExpectValue,
            Span::point(cursor.pos()),
        )),
        Some(b't') => parse_literal(cursor, "true", Value::True),
        Some(b'f') => parse_literal(cursor, "false", Value::False),
        Some(b'n') => parse_literal(cursor, "null", Value::Null),
        Some(_) => parse_number(cursor),
    }
}

// ============================================================================
// LITERALS
// ============================================================================

/// Matches `literal` at the cursor. The caller has already dispatched on its first
/// byte; reaching here on any other byte is a bug, not a parse error.
fn parse_literal(
    cursor: &mut Cursor<'_>,
    literal: &'static str,
    value: Value,
) -> Result<Value, Failure> {
    let expected = literal.as_bytes();
    let input = cursor.remaining().as_bytes();
    assert_eq!(
        input.first(),
        expected.first(),
        "literal `{literal}` dispatched on a different byte"
    );

    for (i, byte) in expected.iter().enumerate().skip(1) {
        if input.get(i) != Some(byte) {
            return Err(Failure::invalid(cursor, cursor.pos(), i));
        }
    }

    cursor.advance(expected.len());
    Ok(value)
}

// ============================================================================
// NUMBERS
// ============================================================================

/// Validates a JSON number token at the cursor, then converts it to `f64`.
///
/// Grammar: `-? (0 | [1-9][0-9]*) (. [0-9]+)? ([eE] [+-]? [0-9]+)?`. A leading `0`
/// consumes exactly one digit; whatever follows it is left for the fraction,
/// exponent and trailing-content checks.
fn parse_number(cursor: &mut Cursor<'_>) -> Result<Value, Failure> {
    let start = cursor.pos();
    let text = cursor.remaining();
    let input = text.as_bytes();
    let at = |i: usize| input.get(i).copied();
    let view: &Cursor<'_> = cursor;
    let invalid = |i: usize| Failure::invalid(view, start, i);

    let mut p = 0;
    if at(p) == Some(b'-') {
        p += 1;
    }

    match at(p) {
        Some(b'0') => p += 1,
        Some(b'1'..=b'9') => p = skip_digits(input, p + 1),
        _ => return Err(invalid(p)),
    }

    if at(p) == Some(b'.') {
        p += 1;
        if !is_digit(at(p)) {
            return Err(invalid(p));
        }
        p = skip_digits(input, p);
    }

    if matches!(at(p), Some(b'e' | b'E')) {
        p += 1;
        if matches!(at(p), Some(b'+' | b'-')) {
            p += 1;
        }
        if !is_digit(at(p)) {
            return Err(invalid(p));
        }
        p = skip_digits(input, p);
    }

    // Every validated byte is ASCII, so `p` is a char boundary.
    let token = &text[..p];
    let number: f64 = token.parse().map_err(|_| invalid(p))?;
    if number.is_infinite() {
        return Err(Failure::new(
            ErrorKind::NumberTooBig,
            Span::new(start, start + p),
        ));
    }

    cursor.advance(p);
    Ok(Value::Number(number))
}

fn is_digit(byte: Option<u8>) -> bool {
    matches!(byte, Some(b'0'..=b'9'))
}

/// Returns the index of the first non-digit at or after `from`.
fn skip_digits(input: &[u8], from: usize) -> usize {
    from + input[from..].iter().take_while(|b| b.is_ascii_digit()).count()
}
