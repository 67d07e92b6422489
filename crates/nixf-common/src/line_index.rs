//! Mapping from byte positions to line/column pairs.
//! 从字节位置到行列号的映射。

use crate::BytePos;

/// A 1-based line and column. Columns count chars, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LineCol {
    pub line: usize,
    pub col: usize,
}

/// Precomputed line starts for a source buffer.
/// 源码缓冲区的行起始位置表。
#[derive(Debug, Clone)]
pub struct LineIndex<'src> {
    source: &'src str,
    line_starts: Vec<usize>,
}

impl<'src> LineIndex<'src> {
    pub fn new(source: &'src str) -> Self {
        let line_starts = std::iter::once(0)
            .chain(source.match_indices('\n').map(|(i, _)| i + 1))
            .collect();
        Self {
            source,
            line_starts,
        }
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Look up the line and column of `pos`.
    /// Positions past the end of the source are clamped to the end.
    pub fn line_col(&self, pos: BytePos) -> LineCol {
        let offset = usize::from(pos).min(self.source.len());
        let line = match self.line_starts.binary_search(&offset) {
            Ok(exact) => exact,
            Err(next) => next - 1,
        };
        let line_start = self.line_starts[line];
        let col = self
            .source
            .get(line_start..offset)
            .map(|text| text.chars().count())
            .unwrap_or(offset - line_start);
        LineCol {
            line: line + 1,
            col: col + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line() {
        let index = LineIndex::new("abc");
        assert_eq!(index.line_col(BytePos(0)), LineCol { line: 1, col: 1 });
        assert_eq!(index.line_col(BytePos(2)), LineCol { line: 1, col: 3 });
    }

    #[test]
    fn test_line_after_newline() {
        let index = LineIndex::new("ab\ncd\n");
        assert_eq!(index.line_count(), 3);
        assert_eq!(index.line_col(BytePos(2)), LineCol { line: 1, col: 3 });
        assert_eq!(index.line_col(BytePos(3)), LineCol { line: 2, col: 1 });
        assert_eq!(index.line_col(BytePos(6)), LineCol { line: 3, col: 1 });
    }

    #[test]
    fn test_columns_count_chars() {
        // "é" is two bytes
        let index = LineIndex::new("é=1");
        assert_eq!(index.line_col(BytePos(2)), LineCol { line: 1, col: 2 });
    }

    #[test]
    fn test_clamps_past_end() {
        let index = LineIndex::new("ab");
        assert_eq!(index.line_col(BytePos(99)), LineCol { line: 1, col: 3 });
    }
}
