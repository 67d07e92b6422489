//! Integration tests for nixf-common crate.

use nixf_common::{BytePos, LineCol, LineIndex, Span};

#[test]
fn test_span_merge() {
    let a = Span::from_usize(10, 20);
    let b = Span::from_usize(15, 30);
    let merged = a.merge(b);
    assert_eq!(merged.start.0, 10);
    assert_eq!(merged.end.0, 30);
}

#[test]
fn test_span_len() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.len(), 10);
}

#[test]
fn test_span_is_empty() {
    let empty = Span::from_usize(5, 5);
    let non_empty = Span::from_usize(5, 10);
    assert!(empty.is_empty());
    assert!(!non_empty.is_empty());
}

#[test]
fn test_span_range() {
    let span = Span::from_usize(5, 15);
    assert_eq!(span.range(), 5..15);
}

#[test]
fn test_span_contains() {
    let span = Span::from_usize(5, 15);
    assert!(span.contains(BytePos(5)));
    assert!(!span.contains(BytePos(15)));
    assert!(span.contains_span(Span::from_usize(6, 15)));
    assert!(!span.contains_span(Span::from_usize(4, 15)));
}

#[test]
fn test_byte_pos_offset() {
    let pos = BytePos(10);
    assert_eq!(pos.offset(5), BytePos(15));
}

#[test]
fn test_span_debug() {
    assert_eq!(format!("{:?}", Span::from_usize(3, 9)), "3..9");
    assert_eq!(format!("{:?}", BytePos(7)), "BytePos(7)");
}

#[test]
fn test_span_serde() {
    let span = Span::from_usize(1, 4);
    let json = serde_json::to_string(&span).unwrap();
    assert_eq!(json, r#"{"start":1,"end":4}"#);
    let back: Span = serde_json::from_str(&json).unwrap();
    assert_eq!(back, span);
}

#[test]
fn test_line_index() {
    let source = "\"a\"\n  \"b${1}\"\n";
    let index = LineIndex::new(source);
    assert_eq!(index.line_count(), 3);
    assert_eq!(index.line_col(BytePos(0)), LineCol { line: 1, col: 1 });
    assert_eq!(index.line_col(BytePos(6)), LineCol { line: 2, col: 3 });
    assert_eq!(index.line_col(BytePos(10)), LineCol { line: 2, col: 7 });
}
