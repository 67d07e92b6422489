//! Read-only checks over nixf syntax trees.
//! 对 nixf 语法树的只读检查。
//!
//! The node model trusts its producer. This crate is the other side of that
//! contract: it walks a finished tree and reports shapes a well-behaved
//! parser would not build, plus a few style issues in string literals.

mod check;
mod config;

pub use config::TidyConfig;

use nixf_diagnostic::Diagnostic;
use nixf_syntax::{Expr, Node};

/// Runs the enabled checks over a tree.
pub struct Tidy {
    config: TidyConfig,
}

impl Tidy {
    pub fn new(config: TidyConfig) -> Self {
        Self { config }
    }

    /// Check `expr` and everything below it.
    pub fn check(&self, expr: &Expr) -> Vec<Diagnostic> {
        log::debug!("tidy: checking {} node at {:?}", expr.kind(), expr.range());
        let mut diagnostics = Vec::new();
        check::Checker::new(&self.config, &mut diagnostics).visit(expr.as_node(), None);
        log::debug!("tidy: {} diagnostics", diagnostics.len());
        diagnostics
    }
}

/// Check `expr` with every check enabled.
pub fn check(expr: &Expr) -> Vec<Diagnostic> {
    Tidy::new(TidyConfig::default()).check(expr)
}
