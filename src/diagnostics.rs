//! Parse outcomes and `miette`-based diagnostics.
//!
//! [`ParseStatus`] is the plain result code returned by [`crate::parse`]. [`ParseError`]
//! is the rich error returned by [`crate::parse_value`]: it carries the input text and
//! the [`Span`] where parsing stopped, and implements [`miette::Diagnostic`] so a host
//! can render a labeled report.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceCode};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::syntax::Span;

pub type SourceArc = Arc<NamedSource<String>>;

/// Name given to the input text in rendered reports.
const SOURCE_NAME: &str = "json";

// ============================================================================
// STATUS CODES
// ============================================================================

/// The outcome of one [`crate::parse`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParseStatus {
    /// The whole input, after trimming whitespace, is exactly one literal or number.
    Ok,
    /// The input is empty or all whitespace.
    ExpectValue,
    /// The lookahead starts neither a literal nor a valid number.
    InvalidValue,
    /// A value parsed but non-whitespace input remains after it.
    RootNotSingular,
    /// The number is well formed but overflows `f64` to infinity.
    NumberTooBig,
}

impl ParseStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, ParseStatus::Ok)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ParseStatus::Ok => "ok",
            ParseStatus::ExpectValue => "expect_value",
            ParseStatus::InvalidValue => "invalid_value",
            ParseStatus::RootNotSingular => "root_not_singular",
            ParseStatus::NumberTooBig => "number_too_big",
        }
    }
}

impl fmt::Display for ParseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The failing subset of [`ParseStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ExpectValue,
    InvalidValue,
    RootNotSingular,
    NumberTooBig,
}

impl From<ErrorKind> for ParseStatus {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::ExpectValue => ParseStatus::ExpectValue,
            ErrorKind::InvalidValue => ParseStatus::InvalidValue,
            ErrorKind::RootNotSingular => ParseStatus::RootNotSingular,
            ErrorKind::NumberTooBig => ParseStatus::NumberTooBig,
        }
    }
}

// ============================================================================
// ERROR CONTEXT
// ============================================================================

/// Source, location and help text attached to a [`ParseError`].
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    pub source: Option<SourceArc>,
    pub span: Option<Span>,
    pub help: Option<String>,
}

impl ErrorContext {
    /// Creates a context over `json` pointing at `span`.
    pub fn with_source_and_span(json: &str, span: Span) -> Self {
        Self {
            source: Some(to_error_source(json)),
            span: Some(span),
            help: None,
        }
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Wraps input text for use in error contexts.
pub fn to_error_source<S: AsRef<str>>(source: S) -> SourceArc {
    Arc::new(NamedSource::new(SOURCE_NAME, source.as_ref().to_string()))
}

// ============================================================================
// PARSE ERROR
// ============================================================================

/// A failed parse, located in its input.
#[derive(Debug, Clone, Error)]
pub enum ParseError {
    #[error("expected a value")]
    ExpectValue { ctx: ErrorContext },
    #[error("invalid value")]
    InvalidValue { ctx: ErrorContext },
    #[error("root value is followed by more content")]
    RootNotSingular { ctx: ErrorContext },
    #[error("number is too big")]
    NumberTooBig { ctx: ErrorContext },
}

impl ParseError {
    /// Builds the error for `kind` over `json`, with the standard help text.
    pub fn new(kind: ErrorKind, json: &str, span: Span) -> Self {
        let ctx = ErrorContext::with_source_and_span(json, span);
        match kind {
            ErrorKind::ExpectValue => ParseError::ExpectValue {
                ctx: ctx.with_help("the input is empty or contains only whitespace"),
            },
            ErrorKind::InvalidValue => ParseError::InvalidValue {
                ctx: ctx.with_help("expected `true`, `false`, `null` or a JSON number"),
            },
            ErrorKind::RootNotSingular => ParseError::RootNotSingular {
                ctx: ctx.with_help("a document holds exactly one value; remove the trailing content"),
            },
            ErrorKind::NumberTooBig => ParseError::NumberTooBig {
                ctx: ctx.with_help("the magnitude does not fit in a 64-bit float"),
            },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::ExpectValue { .. } => ErrorKind::ExpectValue,
            ParseError::InvalidValue { .. } => ErrorKind::InvalidValue,
            ParseError::RootNotSingular { .. } => ErrorKind::RootNotSingular,
            ParseError::NumberTooBig { .. } => ErrorKind::NumberTooBig,
        }
    }

    pub fn status(&self) -> ParseStatus {
        self.kind().into()
    }

    pub fn span(&self) -> Option<Span> {
        self.ctx().span
    }

    fn ctx(&self) -> &ErrorContext {
        match self {
            ParseError::ExpectValue { ctx }
            | ParseError::InvalidValue { ctx }
            | ParseError::RootNotSingular { ctx }
            | ParseError::NumberTooBig { ctx } => ctx,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            ParseError::ExpectValue { .. } => "input ends here",
            ParseError::InvalidValue { .. } => "not a literal or number",
            ParseError::RootNotSingular { .. } => "unexpected trailing content",
            ParseError::NumberTooBig { .. } => "overflows to infinity",
        }
    }
}

impl Diagnostic for ParseError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(format!("scalar_json::{}", self.status())))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.ctx()
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display + 'a>)
    }

    fn source_code(&self) -> Option<&dyn SourceCode> {
        self.ctx()
            .source
            .as_ref()
            .map(|s| s.as_ref() as &dyn SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let span = self.ctx().span?;
        let label = LabeledSpan::new_with_span(Some(self.label().to_string()), span);
        Some(Box::new(std::iter::once(label)))
    }
}
