//! Diagnostic types and builders.

use crate::ErrorCode;
use nixf_common::Span;
use nixf_syntax::Node;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Note,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Error => "error",
            Severity::Warning => "warning",
            Severity::Note => "note",
        }
    }
}

/// Kind of diagnostic for categorization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// Producer-side tag: set by the parser (or any other code that builds
    /// a tree) for problems found while building it. Nothing in this
    /// workspace builds trees from text, so no crate here emits it.
    Syntax,
    /// Reported by a read-only check over a finished tree.
    Tidy,
}

/// A labeled span within a diagnostic.
#[derive(Debug, Clone)]
pub struct Label {
    pub span: Span,
    pub message: String,
}

impl Label {
    pub fn new(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
        }
    }

    /// A label covering the range of `node`.
    pub fn at(node: &impl Node, message: impl Into<String>) -> Self {
        Self::new(node.range(), message)
    }
}

/// A diagnostic message with optional labels, notes, and help.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    pub severity: Severity,
    pub kind: DiagnosticKind,
    pub code: Option<ErrorCode>,
    pub message: String,
    pub span: Span,
    pub labels: Vec<Label>,
    pub notes: Vec<String>,
    pub help: Option<String>,
}

impl Diagnostic {
    fn with_severity(
        severity: Severity,
        kind: DiagnosticKind,
        span: Span,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            code: None,
            message: message.into(),
            span,
            labels: vec![],
            notes: vec![],
            help: None,
        }
    }

    pub fn error(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Error, kind, span, message)
    }

    pub fn warning(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Warning, kind, span, message)
    }

    pub fn note(kind: DiagnosticKind, span: Span, message: impl Into<String>) -> Self {
        Self::with_severity(Severity::Note, kind, span, message)
    }

    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    pub fn with_label(mut self, label: Label) -> Self {
        self.labels.push(label);
        self
    }

    pub fn with_labels(mut self, labels: impl IntoIterator<Item = Label>) -> Self {
        self.labels.extend(labels);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nixf_syntax::ExprInt;

    #[test]
    fn test_builder() {
        let diag = Diagnostic::warning(DiagnosticKind::Tidy, Span::from_usize(1, 4), "odd")
            .with_code(ErrorCode::EmptyFragment)
            .with_note("first")
            .with_note("second")
            .with_help("merge them");
        assert_eq!(diag.severity, Severity::Warning);
        assert_eq!(diag.code, Some(ErrorCode::EmptyFragment));
        assert_eq!(diag.notes, vec!["first", "second"]);
        assert_eq!(diag.help.as_deref(), Some("merge them"));
        assert!(!diag.is_error());
    }

    #[test]
    fn test_label_at_node() {
        let int = ExprInt::new(Span::from_usize(6, 9), 100);
        let label = Label::at(&int, "here");
        assert_eq!(label.span, Span::from_usize(6, 9));
        assert_eq!(label.message, "here");
    }
}
