use serde::Serialize;

use super::kinds::{Deletion, Insertion};
use crate::span::Span;

/// A scanned segment with byte spans into the input.
///
/// All variants store spans rather than text, enabling lossless round-trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum SegmentNode {
    /// Text outside any markup.
    Plain(Span),
    /// A standalone deleted span `~~inner~~`.
    Deleted {
        /// Full span including both `~~`.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
    /// A standalone inserted span `**inner**`.
    Inserted {
        /// Full span including both `**`.
        full: Span,
        /// Content between the delimiters.
        inner: Span,
    },
    /// A deletion paired with the insertion that replaces it.
    Replacement {
        /// From the opening `~~` to the closing `**`, gap included.
        full: Span,
        /// Content of the `~~` half.
        deleted: Span,
        /// Content of the `**` half.
        inserted: Span,
    },
}

impl SegmentNode {
    /// The source span this node was derived from.
    pub fn full(&self) -> Span {
        match *self {
            SegmentNode::Plain(sp) => sp,
            SegmentNode::Deleted { full, .. }
            | SegmentNode::Inserted { full, .. }
            | SegmentNode::Replacement { full, .. } => full,
        }
    }

    /// Whitespace between the two halves of a replacement.
    ///
    /// `None` for every other kind.
    pub fn gap(&self) -> Option<Span> {
        match *self {
            SegmentNode::Replacement {
                deleted, inserted, ..
            } => Some(Span {
                start: deleted.end + Deletion::MARK.len(),
                end: inserted.start - Insertion::MARK.len(),
            }),
            _ => None,
        }
    }

    /// Variant name, as used in logs and snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            SegmentNode::Plain(_) => "Plain",
            SegmentNode::Deleted { .. } => "Deleted",
            SegmentNode::Inserted { .. } => "Inserted",
            SegmentNode::Replacement { .. } => "Replacement",
        }
    }
}

/// One classified piece of annotated text, borrowing from the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "text", rename_all = "kebab-case")]
pub enum Segment<'a> {
    /// Literal text, rendered unchanged.
    Plain(&'a str),
    /// Text that was removed, with no insertion next to it.
    Deleted(&'a str),
    /// Text that was added, with no deletion next to it.
    Inserted(&'a str),
    /// Removed text followed by the text that replaces it.
    Replacement(&'a str, &'a str),
}

impl<'a> Segment<'a> {
    /// Resolves a span-based node against the input it was scanned from.
    pub fn from_node(source: &'a str, node: &SegmentNode) -> Self {
        match *node {
            SegmentNode::Plain(sp) => Segment::Plain(sp.slice(source)),
            SegmentNode::Deleted { inner, .. } => Segment::Deleted(inner.slice(source)),
            SegmentNode::Inserted { inner, .. } => Segment::Inserted(inner.slice(source)),
            SegmentNode::Replacement {
                deleted, inserted, ..
            } => Segment::Replacement(deleted.slice(source), inserted.slice(source)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_span_of_each_variant() {
        let plain = SegmentNode::Plain(Span::new(0, 3));
        let replacement = SegmentNode::Replacement {
            full: Span::new(3, 17),
            deleted: Span::new(5, 8),
            inserted: Span::new(12, 15),
        };
        assert_eq!(plain.full(), Span::new(0, 3));
        assert_eq!(replacement.full(), Span::new(3, 17));
    }

    #[test]
    fn from_node_borrows_inner_text() {
        let src = "~~old~~**new**";
        let node = SegmentNode::Replacement {
            full: Span::new(0, 14),
            deleted: Span::new(2, 5),
            inserted: Span::new(9, 12),
        };
        assert_eq!(
            Segment::from_node(src, &node),
            Segment::Replacement("old", "new")
        );
    }

    #[test]
    fn gap_sits_between_replacement_halves() {
        // "~~old~~ \t**new**"
        let node = SegmentNode::Replacement {
            full: Span::new(0, 16),
            deleted: Span::new(2, 5),
            inserted: Span::new(11, 14),
        };
        assert_eq!(node.gap(), Some(Span::new(7, 9)));
        assert_eq!(SegmentNode::Plain(Span::new(0, 3)).gap(), None);
    }

    #[test]
    fn serializes_tagged_by_kind() {
        let json = serde_json::to_string(&[
            Segment::Plain("a "),
            Segment::Replacement("old", "new"),
        ])
        .unwrap();
        assert_eq!(
            json,
            r#"[{"kind":"plain","text":"a "},{"kind":"replacement","text":["old","new"]}]"#
        );
    }
}
