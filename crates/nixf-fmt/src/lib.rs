//! Source printer for nixf.
//! nixf 源代码打印器。
//!
//! Turns a syntax tree back into source text. This is also where a string
//! literal's fragments are put back together: text is re-escaped and each
//! interpolation is printed inside `${ }`.

mod config;
mod format;
pub mod printer;

pub use config::FormatConfig;
pub use format::Formatter;

use nixf_common::Span;
use nixf_syntax::Expr;
use thiserror::Error;

/// Format an expression with the default configuration.
/// 使用默认配置格式化表达式。
pub fn format_expr(expr: &Expr) -> Result<String, FormatError> {
    format_expr_with_config(expr, &FormatConfig::default())
}

/// Format an expression with custom configuration.
/// 使用自定义配置格式化表达式。
pub fn format_expr_with_config(expr: &Expr, config: &FormatConfig) -> Result<String, FormatError> {
    Formatter::new(config.clone()).format(expr)
}

/// Format errors.
/// 格式化错误。
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    /// NaN and infinities have no literal spelling.
    #[error("float `{value}` at {span:?} has no literal form")]
    NonFiniteFloat { value: f64, span: Span },
}
