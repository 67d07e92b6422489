//! Node kind tags.
//! 节点类型标签。

use serde::{Deserialize, Serialize};
use std::fmt;

/// The dynamic type of every syntax node.
/// 每个语法节点的动态类型。
///
/// Kinds are ordered, and each node family occupies a contiguous run of
/// discriminants bounded by a pair of sentinel constants. Expressions span
/// [`NodeKind::BEGIN_EXPR`] to [`NodeKind::END_EXPR`] inclusive. Adding a
/// kind to a family means inserting it between that family's sentinels and
/// moving the sentinel if it lands at an edge; a kind placed outside the run
/// silently drops out of the family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum NodeKind {
    /// Fragment list of a string literal / 字符串字面量的片段列表
    InterpolatedParts = 0,

    // Expressions 表达式
    /// Integer literal / 整数字面量
    ExprInt = 1,
    /// Float literal / 浮点数字面量
    ExprFloat = 2,
    /// String literal / 字符串字面量
    ExprString = 3,
}

impl NodeKind {
    /// First expression kind (inclusive).
    pub const BEGIN_EXPR: NodeKind = NodeKind::ExprInt;
    /// Last expression kind (inclusive).
    pub const END_EXPR: NodeKind = NodeKind::ExprString;

    pub const ALL: [NodeKind; 4] = [
        NodeKind::InterpolatedParts,
        NodeKind::ExprInt,
        NodeKind::ExprFloat,
        NodeKind::ExprString,
    ];

    /// Whether this kind belongs to the expression family.
    /// This is the only place the expression range is compared.
    pub const fn is_expr(self) -> bool {
        let tag = self as u8;
        Self::BEGIN_EXPR as u8 <= tag && tag <= Self::END_EXPR as u8
    }

    pub fn as_str(self) -> &'static str {
        match self {
            NodeKind::InterpolatedParts => "interpolated-parts",
            NodeKind::ExprInt => "int",
            NodeKind::ExprFloat => "float",
            NodeKind::ExprString => "string",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_family() {
        assert!(!NodeKind::InterpolatedParts.is_expr());
        assert!(NodeKind::ExprInt.is_expr());
        assert!(NodeKind::ExprFloat.is_expr());
        assert!(NodeKind::ExprString.is_expr());
    }

    #[test]
    fn test_sentinels_bound_a_contiguous_run() {
        let exprs: Vec<_> = NodeKind::ALL.iter().filter(|k| k.is_expr()).collect();
        assert_eq!(*exprs[0], NodeKind::BEGIN_EXPR);
        assert_eq!(**exprs.last().unwrap(), NodeKind::END_EXPR);
        for pair in exprs.windows(2) {
            assert_eq!(*pair[0] as u8 + 1, *pair[1] as u8);
        }
    }

    #[test]
    fn test_all_is_sorted() {
        assert!(NodeKind::ALL.windows(2).all(|w| w[0] < w[1]));
    }
}
