//! Byte ranges into the source document.

use std::{fmt, ops::Range};

/// A half-open byte range into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Span covering the character at 1-based `row` and `col` of `source`.
    ///
    /// Positions past the end of the source clamp to the end.
    pub fn at_position(source: &str, row: u32, col: u32) -> Self {
        let line_start: usize = source
            .split_inclusive('\n')
            .take(row.saturating_sub(1) as usize)
            .map(str::len)
            .sum();
        let line = source.get(line_start..).unwrap_or_default();
        let mut chars = line.char_indices().skip(col.saturating_sub(1) as usize);
        match chars.next() {
            Some((offset, ch)) => {
                let start = line_start + offset;
                Self::new(start..start + ch.len_utf8())
            }
            None => Self::new(source.len()..source.len()),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}
