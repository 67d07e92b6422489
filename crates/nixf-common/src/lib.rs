//! Common utilities and data structures for nixf.
//!
//! This crate provides the positional types used across the AST layer:
//! - `BytePos`: an absolute byte offset into a source buffer
//! - `Span`: a half-open source range attached to every node
//! - `LineIndex`: line/column lookup for diagnostics and tooling

mod line_index;
mod span;

pub use line_index::{LineCol, LineIndex};
pub use span::{BytePos, Span};
