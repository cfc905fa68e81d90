//! # Segmenting
//!
//! Cursor-based scanning of "polished text": prose annotated with `~~deleted~~`
//! and `**inserted**` spans by an upstream reviser.
//!
//! ## Modules
//!
//! - **`types`**: `SegmentNode` (span-based) and `Segment` (borrowed text)
//! - **`kinds`**: Span types with owned delimiters (Deletion, Insertion)
//! - **`cursor`**: `Cursor` for byte-by-byte scanning with position tracking
//! - **`scanner`**: `segment_spans()` with `try_parse_*` helpers
//! - **`options`**: Gap, empty-span and line policies
//!
//! ## Replacement Precedence
//!
//! A deletion directly followed by an insertion is one replacement:
//! `~~old~~**new**` is a single `Replacement("old", "new")`, not a `Deleted`
//! next to an `Inserted`.
//!
//! ## Degradation
//!
//! Scanning never fails. Anything that does not close is plain text, and the
//! full spans of the nodes always partition the input.

pub mod cursor;
pub mod kinds;
pub mod options;
pub mod scanner;
pub mod types;

pub use options::{EmptySpans, PairGap, SegmentOptions, SpanLines};
pub use scanner::segment_spans;
pub use types::{Segment, SegmentNode};

/// Segments `input` with the default [`SegmentOptions`].
///
/// ```
/// use polished_text_engine::{Segment, segment};
///
/// assert_eq!(
///     segment("a ~~teh~~**the** cat"),
///     vec![
///         Segment::Plain("a "),
///         Segment::Replacement("teh", "the"),
///         Segment::Plain(" cat"),
///     ]
/// );
/// ```
pub fn segment(input: &str) -> Vec<Segment<'_>> {
    segment_with(input, &SegmentOptions::default())
}

/// Segments `input` with explicit options.
pub fn segment_with<'a>(input: &'a str, opts: &SegmentOptions) -> Vec<Segment<'a>> {
    segment_spans(input, opts)
        .iter()
        .map(|node| Segment::from_node(input, node))
        .filter_map(|seg| match opts.empty_spans {
            EmptySpans::Keep => Some(seg),
            EmptySpans::Drop => drop_empty(seg),
        })
        .collect()
}

fn drop_empty(seg: Segment<'_>) -> Option<Segment<'_>> {
    match seg {
        Segment::Deleted("") | Segment::Inserted("") => None,
        Segment::Replacement("", "") => None,
        Segment::Replacement("", inserted) => Some(Segment::Inserted(inserted)),
        Segment::Replacement(deleted, "") => Some(Segment::Deleted(deleted)),
        other => Some(other),
    }
}
