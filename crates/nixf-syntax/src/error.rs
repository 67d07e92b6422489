//! Syntax-layer errors.

use crate::NodeKind;
use thiserror::Error;

/// Errors raised while rebuilding nodes from external data.
///
/// Nodes built in-process through their constructors never produce these;
/// a wrong kind there is a panic.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxError {
    #[error("expected node kind `{expected}`, found `{found}`")]
    KindMismatch { expected: NodeKind, found: NodeKind },
}
