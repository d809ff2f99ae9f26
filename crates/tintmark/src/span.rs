//! Source span type for scanned tokens.

/// A byte range within the markup source.
///
/// Spans of consecutive tokens tile the input: each span starts where the
/// previous one ended, and the final end-of-input span is empty and sits at
/// the input's length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset (inclusive).
    pub start: usize,
    /// End byte offset (exclusive).
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// The source text this span covers.
    ///
    /// Returns `None` if the span is out of bounds or not on a char boundary.
    pub fn slice<'a>(&self, source: &'a str) -> Option<&'a str> {
        source.get(self.start..self.end)
    }
}
