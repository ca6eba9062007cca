//! Tests for the located errors returned by `parse_value`.
//!
//! These check the miette metadata (code, help, labels, source) and that a graphical
//! report names the failure, without pinning the exact rendered layout.

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme};
use scalar_json::{parse_value, ErrorKind, ParseError, ParseStatus, Span, Value};

fn parse_err(json: &str) -> ParseError {
    parse_value(json).expect_err("input should fail to parse")
}

fn render(error: &ParseError) -> String {
    let mut out = String::new();
    GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor())
        .with_width(120)
        .render_report(&mut out, error)
        .expect("rendering into a String cannot fail");
    out
}

fn primary_label(error: &ParseError) -> (Option<String>, usize, usize) {
    let label = error
        .labels()
        .and_then(|mut labels| labels.next())
        .expect("every parse error carries a label");
    (label.label().map(str::to_string), label.offset(), label.len())
}

#[test]
fn test_parse_value_success() {
    assert_eq!(parse_value(" null ").unwrap(), Value::Null);
    assert_eq!(parse_value("1e-3").unwrap(), Value::Number(0.001));
}

#[test]
fn test_status_and_kind_agree() {
    let cases = [
        ("", ErrorKind::ExpectValue, ParseStatus::ExpectValue),
        ("nul", ErrorKind::InvalidValue, ParseStatus::InvalidValue),
        ("1 2", ErrorKind::RootNotSingular, ParseStatus::RootNotSingular),
        ("1e400", ErrorKind::NumberTooBig, ParseStatus::NumberTooBig),
    ];

    for (json, kind, status) in cases {
        let error = parse_err(json);
        assert_eq!(error.kind(), kind, "{json:?}");
        assert_eq!(error.status(), status, "{json:?}");
    }
}

#[test]
fn test_error_codes_are_stable() {
    let code = |json: &str| parse_err(json).code().map(|c| c.to_string());
    assert_eq!(code("  ").as_deref(), Some("scalar_json::expect_value"));
    assert_eq!(code("?").as_deref(), Some("scalar_json::invalid_value"));
    assert_eq!(code("0123").as_deref(), Some("scalar_json::root_not_singular"));
    assert_eq!(code("-1e400").as_deref(), Some("scalar_json::number_too_big"));
}

#[test]
fn test_display_messages() {
    assert_eq!(parse_err("").to_string(), "expected a value");
    assert_eq!(parse_err("+1").to_string(), "invalid value");
    assert_eq!(
        parse_err("true false").to_string(),
        "root value is followed by more content"
    );
    assert_eq!(parse_err("1e309").to_string(), "number is too big");
}

#[test]
fn test_labels_point_at_failure() {
    let (label, offset, len) = primary_label(&parse_err("true false"));
    assert_eq!(label.as_deref(), Some("unexpected trailing content"));
    assert_eq!((offset, len), (5, 5));

    let (_, offset, len) = primary_label(&parse_err(" 1e400"));
    assert_eq!((offset, len), (1, 5));

    let (_, offset, len) = primary_label(&parse_err("   "));
    assert_eq!((offset, len), (3, 0));

    assert_eq!(parse_err(" fa1se").span(), Some(Span::new(1, 4)));
}

#[test]
fn test_source_and_help_are_attached() {
    let error = parse_err("1.");
    assert!(error.source_code().is_some());
    let help = error.help().map(|h| h.to_string()).unwrap_or_default();
    assert!(help.contains("JSON number"), "help was {help:?}");
}

#[test]
fn test_graphical_report_names_failure() {
    let report = render(&parse_err("nulx"));
    assert!(report.contains("invalid value"), "{report}");
    assert!(report.contains("not a literal or number"), "{report}");
    assert!(report.contains("nulx"), "{report}");
}

#[test]
fn test_multibyte_input_renders() {
    let error = parse_err("\u{00e9}t\u{00e9}");
    assert_eq!(error.span(), Some(Span::new(0, 2)));
    let report = render(&error);
    assert!(report.contains("invalid value"), "{report}");
}
