//! AST node model for nixf.
//! nixf 的 AST 节点模型。
//!
//! A parser builds these nodes bottom-up; every later stage (formatting,
//! diagnostics, analysis) reads them without re-parsing. Nodes are immutable
//! once built. String literals share their [`InterpolatedParts`], and every
//! interpolation shares its embedded [`Expr`], through [`std::sync::Arc`] so
//! that several trees (for example an old and a new tree during incremental
//! reparsing) can hold the same subtree.
//!
//! ```
//! use std::sync::Arc;
//! use nixf_common::Span;
//! use nixf_syntax::{Expr, ExprInt, ExprString, InterpolatedParts, Node, NodeKind, StringPart};
//!
//! // "ab${1}cd"
//! let one = Arc::new(Expr::Int(ExprInt::new(Span::from_usize(5, 6), 1)));
//! let parts = Arc::new(InterpolatedParts::new(
//!     Span::from_usize(1, 9),
//!     vec![
//!         StringPart::escaped("ab"),
//!         StringPart::interpolation(one),
//!         StringPart::escaped("cd"),
//!     ],
//! ));
//! let string = ExprString::new(Span::from_usize(0, 10), parts);
//! assert_eq!(string.kind(), NodeKind::ExprString);
//! assert_eq!(string.parts().fragments().len(), 3);
//! ```

mod de;
mod error;
mod expr;
mod kind;
mod node;
mod string;
mod walk;

pub use error::SyntaxError;
pub use expr::*;
pub use kind::NodeKind;
pub use node::{Node, NodeBase, NodeRef};
pub use string::*;
pub use walk::{Descendants, node_at};
