//! Segmenter for "polished text": prose carrying `~~deleted~~` and
//! `**inserted**` edit markup, turned into an ordered list of typed segments
//! for display.

pub mod render;
pub mod segment;
pub mod snapshot;
pub mod span;
pub mod summary;

// Re-export key types for easier usage
pub use segment::{
    EmptySpans, PairGap, Segment, SegmentNode, SegmentOptions, SpanLines, segment, segment_spans,
    segment_with,
};
pub use span::Span;
pub use summary::{EditSummary, original_text, revised_text};
