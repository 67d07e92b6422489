//! Machine-readable diagnostic output.

use crate::Diagnostic;
use nixf_common::{LineCol, LineIndex, Span};
use serde::Serialize;

#[derive(Serialize)]
struct Position {
    line: usize,
    col: usize,
}

impl From<LineCol> for Position {
    fn from(lc: LineCol) -> Self {
        Self {
            line: lc.line,
            col: lc.col,
        }
    }
}

#[derive(Serialize)]
struct Range {
    start: Position,
    end: Position,
}

#[derive(Serialize)]
struct JsonLabel<'a> {
    range: Range,
    message: &'a str,
}

#[derive(Serialize)]
struct JsonDiagnostic<'a> {
    code: Option<&'static str>,
    severity: &'static str,
    message: &'a str,
    range: Range,
    labels: Vec<JsonLabel<'a>>,
    notes: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    help: Option<&'a str>,
}

fn range(index: &LineIndex<'_>, span: Span) -> Range {
    Range {
        start: index.line_col(span.start).into(),
        end: index.line_col(span.end).into(),
    }
}

/// Serialize diagnostics as a JSON array with 1-based line/column ranges.
pub fn to_json(source: &str, diagnostics: &[Diagnostic]) -> serde_json::Result<String> {
    let index = LineIndex::new(source);
    let records: Vec<_> = diagnostics
        .iter()
        .map(|diag| JsonDiagnostic {
            code: diag.code.map(|code| code.as_str()),
            severity: diag.severity.as_str(),
            message: &diag.message,
            range: range(&index, diag.span),
            labels: diag
                .labels
                .iter()
                .map(|label| JsonLabel {
                    range: range(&index, label.span),
                    message: &label.message,
                })
                .collect(),
            notes: &diag.notes,
            help: diag.help.as_deref(),
        })
        .collect();
    serde_json::to_string_pretty(&records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{DiagnosticKind, ErrorCode};

    #[test]
    fn test_json_positions() {
        let source = "\"x\"\n\"${1.0}\"";
        let diag = Diagnostic::error(DiagnosticKind::Tidy, Span::from_usize(7, 10), "bad")
            .with_code(ErrorCode::NonFiniteFloat);
        let json = to_json(source, &[diag]).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let first = &value[0];
        assert_eq!(first["code"], "T0200");
        assert_eq!(first["severity"], "error");
        assert_eq!(first["range"]["start"]["line"], 2);
        assert_eq!(first["range"]["start"]["col"], 4);
        assert_eq!(first["range"]["end"]["col"], 7);
        assert!(first.get("help").is_none());
    }

    #[test]
    fn test_empty_list() {
        assert_eq!(to_json("", &[]).unwrap(), "[]");
    }
}
