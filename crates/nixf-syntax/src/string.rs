//! String literal contents.
//! 字符串字面量内容。

use crate::de::InterpolatedPartsRepr;
use crate::{Expr, Node, NodeBase, NodeKind};
use nixf_common::Span;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Which variant a [`StringPart`] holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringPartKind {
    Escaped,
    Interpolation,
}

/// One piece of a string literal.
/// 字符串字面量的一个片段。
///
/// Not a node: it has no range of its own and gets its meaning from its
/// position inside [`InterpolatedParts`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum StringPart {
    /// Literal text, already unescaped / 已反转义的字面文本
    Escaped(String),
    /// Interpolated expression `${expr}` / 插值表达式
    Interpolation(Arc<Expr>),
}

impl StringPart {
    pub fn escaped(text: impl Into<String>) -> Self {
        StringPart::Escaped(text.into())
    }

    pub fn interpolation(expr: Arc<Expr>) -> Self {
        StringPart::Interpolation(expr)
    }

    pub fn kind(&self) -> StringPartKind {
        match self {
            StringPart::Escaped(_) => StringPartKind::Escaped,
            StringPart::Interpolation(_) => StringPartKind::Interpolation,
        }
    }

    pub fn as_escaped(&self) -> Option<&str> {
        match self {
            StringPart::Escaped(text) => Some(text),
            StringPart::Interpolation(_) => None,
        }
    }

    pub fn as_interpolation(&self) -> Option<&Arc<Expr>> {
        match self {
            StringPart::Escaped(_) => None,
            StringPart::Interpolation(expr) => Some(expr),
        }
    }

    /// The literal text of an escaped fragment.
    ///
    /// # Panics
    ///
    /// Panics if this is an interpolation. Check [`StringPart::kind`] first.
    pub fn escaped_text(&self) -> &str {
        match self {
            StringPart::Escaped(text) => text,
            StringPart::Interpolation(_) => {
                panic!("escaped_text called on an interpolation fragment")
            }
        }
    }

    /// The embedded expression of an interpolation.
    ///
    /// # Panics
    ///
    /// Panics if this is escaped text. Check [`StringPart::kind`] first.
    pub fn interpolated_expr(&self) -> &Arc<Expr> {
        match self {
            StringPart::Interpolation(expr) => expr,
            StringPart::Escaped(_) => {
                panic!("interpolated_expr called on an escaped fragment")
            }
        }
    }
}

/// The ordered fragments of a string literal.
/// 字符串字面量的有序片段列表。
///
/// Fragment order is the left-to-right order of the literal's content.
/// Turning the fragments back into a string (evaluating interpolations,
/// re-escaping text) is left to consumers.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "InterpolatedPartsRepr")]
pub struct InterpolatedParts {
    pub(crate) base: NodeBase,
    pub(crate) fragments: Vec<StringPart>,
}

impl InterpolatedParts {
    pub fn new(range: Span, fragments: Vec<StringPart>) -> Self {
        Self {
            base: NodeBase::new(NodeKind::InterpolatedParts, range),
            fragments,
        }
    }

    pub fn fragments(&self) -> &[StringPart] {
        &self.fragments
    }

    /// True when no fragment is an interpolation.
    pub fn is_literal(&self) -> bool {
        self.fragments
            .iter()
            .all(|fragment| fragment.kind() == StringPartKind::Escaped)
    }

    /// The concatenated text, if the content is purely literal.
    pub fn literal(&self) -> Option<String> {
        self.fragments
            .iter()
            .map(StringPart::as_escaped)
            .collect::<Option<Vec<_>>>()
            .map(|texts| texts.concat())
    }
}

impl Node for InterpolatedParts {
    fn base(&self) -> &NodeBase {
        &self.base
    }
}
