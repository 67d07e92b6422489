//! Expression AST nodes.
//! 表达式 AST 节点。

use crate::de::{ExprFloatRepr, ExprIntRepr, ExprStringRepr};
use crate::{InterpolatedParts, Node, NodeBase, NodeKind, NodeRef};
use nixf_common::Span;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

pub type NixInt = i64;
pub type NixFloat = f64;

/// An expression.
/// 表达式。
///
/// Matching on this enum is how consumers dispatch on expression kind; a new
/// variant breaks every non-exhaustive consumer at compile time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Expr {
    /// Integer literal / 整数字面量
    Int(ExprInt),
    /// Float literal / 浮点数字面量
    Float(ExprFloat),
    /// String literal, possibly interpolated / 字符串字面量（可含插值）
    String(ExprString),
}

impl Expr {
    pub fn as_int(&self) -> Option<&ExprInt> {
        match self {
            Expr::Int(int) => Some(int),
            _ => None,
        }
    }

    pub fn as_float(&self) -> Option<&ExprFloat> {
        match self {
            Expr::Float(float) => Some(float),
            _ => None,
        }
    }

    pub fn as_string(&self) -> Option<&ExprString> {
        match self {
            Expr::String(string) => Some(string),
            _ => None,
        }
    }

    pub fn as_node(&self) -> NodeRef<'_> {
        NodeRef::from(self)
    }
}

impl Node for Expr {
    fn base(&self) -> &NodeBase {
        match self {
            Expr::Int(int) => int.base(),
            Expr::Float(float) => float.base(),
            Expr::String(string) => string.base(),
        }
    }
}

impl From<ExprInt> for Expr {
    fn from(int: ExprInt) -> Self {
        Expr::Int(int)
    }
}

impl From<ExprFloat> for Expr {
    fn from(float: ExprFloat) -> Self {
        Expr::Float(float)
    }
}

impl From<ExprString> for Expr {
    fn from(string: ExprString) -> Self {
        Expr::String(string)
    }
}

/// Integer literal `42`.
/// 整数字面量 `42`。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExprIntRepr")]
pub struct ExprInt {
    pub(crate) base: NodeBase,
    pub(crate) value: NixInt,
}

impl ExprInt {
    pub fn new(range: Span, value: NixInt) -> Self {
        Self {
            base: NodeBase::expr(NodeKind::ExprInt, range),
            value,
        }
    }

    pub fn value(&self) -> NixInt {
        self.value
    }
}

impl Node for ExprInt {
    fn base(&self) -> &NodeBase {
        &self.base
    }
}

/// Float literal `1.5`.
/// 浮点数字面量 `1.5`。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExprFloatRepr")]
pub struct ExprFloat {
    pub(crate) base: NodeBase,
    #[serde(with = "crate::de::float_bits")]
    pub(crate) value: NixFloat,
}

impl ExprFloat {
    pub fn new(range: Span, value: NixFloat) -> Self {
        Self {
            base: NodeBase::expr(NodeKind::ExprFloat, range),
            value,
        }
    }

    /// The stored value, bit for bit (NaN payloads and `-0.0` included).
    pub fn value(&self) -> NixFloat {
        self.value
    }
}

impl Node for ExprFloat {
    fn base(&self) -> &NodeBase {
        &self.base
    }
}

/// String literal `"a${b}c"`.
/// 字符串字面量 `"a${b}c"`。
///
/// The fragment list is shared: cloning an `ExprString` or building another
/// one from the same `Arc` does not copy the fragments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(try_from = "ExprStringRepr")]
pub struct ExprString {
    pub(crate) base: NodeBase,
    pub(crate) parts: Arc<InterpolatedParts>,
}

impl ExprString {
    pub fn new(range: Span, parts: Arc<InterpolatedParts>) -> Self {
        Self {
            base: NodeBase::expr(NodeKind::ExprString, range),
            parts,
        }
    }

    pub fn parts(&self) -> &Arc<InterpolatedParts> {
        &self.parts
    }
}

impl Node for ExprString {
    fn base(&self) -> &NodeBase {
        &self.base
    }
}
