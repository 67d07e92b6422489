//! Integration tests for nixf-fmt crate.

use nixf_common::Span;
use nixf_fmt::{FormatConfig, FormatError, Formatter, format_expr, format_expr_with_config};
use nixf_syntax::{Expr, ExprFloat, ExprInt, ExprString, InterpolatedParts, StringPart};
use std::sync::Arc;

fn int(value: i64) -> Arc<Expr> {
    Arc::new(Expr::Int(ExprInt::new(Span::DUMMY, value)))
}

fn string(fragments: Vec<StringPart>) -> Expr {
    Expr::String(ExprString::new(
        Span::DUMMY,
        Arc::new(InterpolatedParts::new(Span::DUMMY, fragments)),
    ))
}

fn float(value: f64) -> Expr {
    Expr::Float(ExprFloat::new(Span::from_usize(2, 5), value))
}

// ============================================================================
// Literal Tests
// ============================================================================

#[test]
fn test_format_int() {
    assert_eq!(format_expr(&int(42)).unwrap(), "42");
    assert_eq!(format_expr(&int(-1)).unwrap(), "-1");
    assert_eq!(format_expr(&int(i64::MAX)).unwrap(), "9223372036854775807");
}

#[test]
fn test_format_float() {
    assert_eq!(format_expr(&float(1.0)).unwrap(), "1.0");
    assert_eq!(format_expr(&float(3.25)).unwrap(), "3.25");
    assert_eq!(format_expr(&float(1e300)).unwrap(), "1.0e300");
}

#[test]
fn test_format_non_finite_float() {
    let err = format_expr(&float(f64::INFINITY)).unwrap_err();
    assert!(matches!(
        err,
        FormatError::NonFiniteFloat { span, .. } if span == Span::from_usize(2, 5)
    ));
    assert!(format_expr(&float(f64::NAN)).is_err());
}

// ============================================================================
// String Tests
// ============================================================================

#[test]
fn test_format_interpolated_string() {
    let expr = string(vec![
        StringPart::escaped("ab"),
        StringPart::interpolation(int(1)),
        StringPart::escaped("cd"),
    ]);
    assert_eq!(format_expr(&expr).unwrap(), r#""ab${1}cd""#);
}

#[test]
fn test_format_empty_string() {
    assert_eq!(format_expr(&string(Vec::new())).unwrap(), r#""""#);
}

#[test]
fn test_format_escapes() {
    let expr = string(vec![StringPart::escaped("say \"hi\"\\\n\t\r")]);
    assert_eq!(format_expr(&expr).unwrap(), r#""say \"hi\"\\\n\t\r""#);
}

#[test]
fn test_format_dollar_before_brace() {
    let expr = string(vec![StringPart::escaped("${x} costs $5")]);
    assert_eq!(format_expr(&expr).unwrap(), r#""\${x} costs $5""#);
}

#[test]
fn test_format_dollar_across_fragments() {
    let before_interp = string(vec![
        StringPart::escaped("$"),
        StringPart::interpolation(int(1)),
    ]);
    assert_eq!(format_expr(&before_interp).unwrap(), r#""\$${1}""#);

    let before_brace = string(vec![
        StringPart::escaped("$"),
        StringPart::escaped(""),
        StringPart::escaped("{"),
    ]);
    assert_eq!(format_expr(&before_brace).unwrap(), r#""\${""#);

    let trailing = string(vec![StringPart::escaped("a$")]);
    assert_eq!(format_expr(&trailing).unwrap(), r#""a$""#);
}

#[test]
fn test_format_nested_string() {
    let inner = Arc::new(string(vec![
        StringPart::escaped("y"),
        StringPart::interpolation(int(2)),
    ]));
    let outer = string(vec![
        StringPart::escaped("x"),
        StringPart::interpolation(inner),
    ]);
    assert_eq!(format_expr(&outer).unwrap(), r#""x${"y${2}"}""#);
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn test_escape_all_dollars() {
    let expr = string(vec![StringPart::escaped("$5")]);
    let config = FormatConfig::new().escape_all_dollars(true);
    assert_eq!(format_expr_with_config(&expr, &config).unwrap(), r#""\$5""#);
}

#[test]
fn test_trailing_newline() {
    let formatter = Formatter::new(FormatConfig::new().trailing_newline(true));
    assert_eq!(formatter.format(&int(7)).unwrap(), "7\n");
}
