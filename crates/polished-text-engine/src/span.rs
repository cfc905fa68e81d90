use serde::Serialize;

/// A byte range `[start, end)` into the annotated input.
///
/// Segment nodes store spans rather than copied text, enabling lossless
/// round-trip: slicing the input with every node's full span, in order,
/// reproduces the exact source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Returns true if `other` lies entirely within this span.
    #[must_use]
    pub fn contains(self, other: Span) -> bool {
        other.start >= self.start && other.end <= self.end
    }

    /// Slices `source` with this span.
    ///
    /// Spans produced by the segmenter always fall on char boundaries of the
    /// input they were produced from.
    pub fn slice(self, source: &str) -> &str {
        &source[self.start..self.end]
    }
}
