//! Error codes for nixf diagnostics.

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Tree shape (T0001 - T0099)
    InvertedRange,
    ChildOutsideParent,

    // String literals (T0100 - T0199)
    EmptyFragment,
    AdjacentEscaped,
    RedundantInterpolation,

    // Numbers (T0200 - T0299)
    NonFiniteFloat,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvertedRange => "T0001",
            ErrorCode::ChildOutsideParent => "T0002",

            ErrorCode::EmptyFragment => "T0100",
            ErrorCode::AdjacentEscaped => "T0101",
            ErrorCode::RedundantInterpolation => "T0102",

            ErrorCode::NonFiniteFloat => "T0200",
        }
    }

    /// Get a human-readable description of the error.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::InvertedRange => "node range ends before it begins",
            ErrorCode::ChildOutsideParent => "child node range is not inside its parent",

            ErrorCode::EmptyFragment => "string contains an empty text fragment",
            ErrorCode::AdjacentEscaped => "adjacent text fragments should be a single fragment",
            ErrorCode::RedundantInterpolation => "interpolation of a plain string literal",

            ErrorCode::NonFiniteFloat => "float literal is not a finite number",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
