//! A small recursive-descent parser for the scalar subset of JSON.
//!
//! Recognizes `true`, `false`, `null` and JSON numbers. The status-style entry point
//! [`parse`] mirrors a classic C API: it writes into a caller-owned [`Value`] slot and
//! returns a [`ParseStatus`]. [`parse_value`] runs the same engine and returns a
//! `Result` whose error is a [`miette::Diagnostic`].
//!
//! ```rust
//! use scalar_json::{get_number, get_type, parse, ParseStatus, Value, ValueType};
//!
//! let mut value = Value::default();
//! assert_eq!(parse(&mut value, " -1.5e3 "), ParseStatus::Ok);
//! assert_eq!(get_type(&value), ValueType::Number);
//! assert_eq!(get_number(&value), -1500.0);
//! ```

pub use crate::diagnostics::{ErrorContext, ErrorKind, ParseError, ParseStatus};
pub use crate::syntax::parser::{parse, parse_value};
pub use crate::syntax::Span;
pub use crate::value::{get_number, get_type, Value, ValueType};

pub mod diagnostics;
pub mod syntax;
pub mod value;
