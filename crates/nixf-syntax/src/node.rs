//! The node header shared by every syntax node, and dynamic node handles.
//! 所有语法节点共享的节点头，以及动态节点句柄。

use crate::{Expr, ExprFloat, ExprInt, ExprString, InterpolatedParts, NodeKind};
use nixf_common::{BytePos, Span};
use serde::{Deserialize, Serialize};

/// Kind tag and source range. Every concrete node embeds exactly one.
/// 类型标签和源码范围。每个具体节点都嵌入一个。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeBase {
    kind: NodeKind,
    range: Span,
}

impl NodeBase {
    pub fn new(kind: NodeKind, range: Span) -> Self {
        Self { kind, range }
    }

    /// Header for an expression node.
    ///
    /// # Panics
    ///
    /// Panics if `kind` is not an expression kind. That is a bug in the
    /// caller, not bad input.
    pub fn expr(kind: NodeKind, range: Span) -> Self {
        assert!(
            kind.is_expr(),
            "expression node constructed with non-expression kind `{kind}`"
        );
        Self::new(kind, range)
    }

    pub fn kind(&self) -> NodeKind {
        self.kind
    }

    pub fn range(&self) -> Span {
        self.range
    }
}

/// Read access common to all nodes.
/// 所有节点共有的只读访问接口。
pub trait Node {
    fn base(&self) -> &NodeBase;

    fn kind(&self) -> NodeKind {
        self.base().kind()
    }

    fn range(&self) -> Span {
        self.base().range()
    }

    fn begin(&self) -> BytePos {
        self.base().range().start
    }

    fn end(&self) -> BytePos {
        self.base().range().end
    }
}

/// A borrowed handle to any node, for kind dispatch and downcasting.
/// 指向任意节点的借用句柄，用于按类型分派和向下转换。
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    InterpolatedParts(&'a InterpolatedParts),
    ExprInt(&'a ExprInt),
    ExprFloat(&'a ExprFloat),
    ExprString(&'a ExprString),
}

impl<'a> NodeRef<'a> {
    pub fn as_interpolated_parts(self) -> Option<&'a InterpolatedParts> {
        match self {
            NodeRef::InterpolatedParts(parts) => Some(parts),
            _ => None,
        }
    }

    pub fn as_expr_int(self) -> Option<&'a ExprInt> {
        match self {
            NodeRef::ExprInt(int) => Some(int),
            _ => None,
        }
    }

    pub fn as_expr_float(self) -> Option<&'a ExprFloat> {
        match self {
            NodeRef::ExprFloat(float) => Some(float),
            _ => None,
        }
    }

    pub fn as_expr_string(self) -> Option<&'a ExprString> {
        match self {
            NodeRef::ExprString(string) => Some(string),
            _ => None,
        }
    }

    /// Direct children in source order.
    ///
    /// A string literal has its parts as the only child; the parts have one
    /// child per interpolation. Escaped text is not a node.
    pub fn children(self) -> Vec<NodeRef<'a>> {
        match self {
            NodeRef::ExprString(string) => vec![NodeRef::InterpolatedParts(string.parts())],
            NodeRef::InterpolatedParts(parts) => parts
                .fragments()
                .iter()
                .filter_map(|fragment| fragment.as_interpolation())
                .map(|expr| NodeRef::from(&**expr))
                .collect(),
            NodeRef::ExprInt(_) | NodeRef::ExprFloat(_) => Vec::new(),
        }
    }
}

impl Node for NodeRef<'_> {
    fn base(&self) -> &NodeBase {
        match *self {
            NodeRef::InterpolatedParts(node) => node.base(),
            NodeRef::ExprInt(node) => node.base(),
            NodeRef::ExprFloat(node) => node.base(),
            NodeRef::ExprString(node) => node.base(),
        }
    }
}

impl<'a> From<&'a Expr> for NodeRef<'a> {
    fn from(expr: &'a Expr) -> Self {
        match expr {
            Expr::Int(int) => NodeRef::ExprInt(int),
            Expr::Float(float) => NodeRef::ExprFloat(float),
            Expr::String(string) => NodeRef::ExprString(string),
        }
    }
}

impl<'a> From<&'a InterpolatedParts> for NodeRef<'a> {
    fn from(parts: &'a InterpolatedParts) -> Self {
        NodeRef::InterpolatedParts(parts)
    }
}
