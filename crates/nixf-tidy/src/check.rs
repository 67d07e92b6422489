//! The tree walk behind [`Tidy`](crate::Tidy).

use crate::TidyConfig;
use nixf_diagnostic::{Diagnostic, DiagnosticKind, ErrorCode, Label};
use nixf_syntax::{ExprFloat, InterpolatedParts, Node, NodeRef, StringPart};

/// A label on `node`, unless its range is inverted and cannot be pointed at.
fn node_label(node: &impl Node, message: impl Into<String>) -> Option<Label> {
    node.range()
        .is_well_formed()
        .then(|| Label::at(node, message))
}

pub(crate) struct Checker<'c> {
    config: &'c TidyConfig,
    diagnostics: &'c mut Vec<Diagnostic>,
}

impl<'c> Checker<'c> {
    pub(crate) fn new(config: &'c TidyConfig, diagnostics: &'c mut Vec<Diagnostic>) -> Self {
        Self {
            config,
            diagnostics,
        }
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        let enabled = diagnostic
            .code
            .is_none_or(|code| self.config.is_enabled(code));
        if enabled {
            log::trace!("tidy: {:?} at {:?}", diagnostic.code, diagnostic.span);
            self.diagnostics.push(diagnostic);
        }
    }

    pub(crate) fn visit(&mut self, node: NodeRef<'_>, parent: Option<NodeRef<'_>>) {
        self.check_range(node, parent);

        match node {
            NodeRef::ExprFloat(float) => self.check_float(float),
            NodeRef::InterpolatedParts(parts) => self.check_parts(parts),
            NodeRef::ExprInt(_) | NodeRef::ExprString(_) => {}
        }

        for child in node.children() {
            self.visit(child, Some(node));
        }
    }

    fn check_range(&mut self, node: NodeRef<'_>, parent: Option<NodeRef<'_>>) {
        let range = node.range();
        if !range.is_well_formed() {
            self.report(
                Diagnostic::error(
                    DiagnosticKind::Tidy,
                    range,
                    format!("{} node ends before it begins", node.kind()),
                )
                .with_code(ErrorCode::InvertedRange)
                .with_note(format!(
                    "begins at byte {}, ends at byte {}",
                    node.begin().0,
                    node.end().0
                )),
            );
            return;
        }

        if let Some(parent) = parent {
            if parent.range().is_well_formed() && !parent.range().contains_span(range) {
                self.report(
                    Diagnostic::error(
                        DiagnosticKind::Tidy,
                        range,
                        format!("{} node lies outside its parent", node.kind()),
                    )
                    .with_code(ErrorCode::ChildOutsideParent)
                    .with_label(Label::at(&node, "this node"))
                    .with_label(Label::at(&parent, format!("inside this {}", parent.kind()))),
                );
            }
        }
    }

    fn check_float(&mut self, float: &ExprFloat) {
        if !float.value().is_finite() {
            self.report(
                Diagnostic::error(
                    DiagnosticKind::Tidy,
                    float.range(),
                    format!("float literal `{}` is not finite", float.value()),
                )
                .with_code(ErrorCode::NonFiniteFloat)
                .with_labels(node_label(float, "no source spelling for this value")),
            );
        }
    }

    fn check_parts(&mut self, parts: &InterpolatedParts) {
        let fragments = parts.fragments();

        for fragment in fragments {
            match fragment {
                StringPart::Escaped(text) if text.is_empty() => {
                    self.report(
                        Diagnostic::warning(
                            DiagnosticKind::Tidy,
                            parts.range(),
                            "string contains an empty text fragment",
                        )
                        .with_code(ErrorCode::EmptyFragment),
                    );
                }
                StringPart::Interpolation(expr) => {
                    let plain = expr
                        .as_string()
                        .is_some_and(|string| string.parts().is_literal());
                    if plain {
                        self.report(
                            Diagnostic::warning(
                                DiagnosticKind::Tidy,
                                expr.range(),
                                "interpolation of a plain string literal",
                            )
                            .with_code(ErrorCode::RedundantInterpolation)
                            .with_labels(node_label(&**expr, "this string has no interpolations"))
                            .with_help("write the text directly"),
                        );
                    }
                }
                StringPart::Escaped(_) => {}
            }
        }

        for pair in fragments.windows(2) {
            if let [StringPart::Escaped(_), StringPart::Escaped(_)] = pair {
                self.report(
                    Diagnostic::warning(
                        DiagnosticKind::Tidy,
                        parts.range(),
                        "adjacent text fragments",
                    )
                    .with_code(ErrorCode::AdjacentEscaped)
                    .with_help("merge them into a single fragment"),
                );
            }
        }
    }
}
