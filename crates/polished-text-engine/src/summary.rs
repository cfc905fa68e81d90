//! Projections of a segment list back to flat text, and edit counts.

use serde::Serialize;

use crate::segment::{Segment, SegmentNode};

/// The passage as it read before revision: plain text plus deleted sides.
///
/// Whitespace between the halves of a replacement is kept, so the
/// projection loses only the delimiters and the inserted text.
pub fn original_text(source: &str, nodes: &[SegmentNode]) -> String {
    project(source, nodes, Side::Original)
}

/// The passage as it reads after revision: plain text plus inserted sides.
pub fn revised_text(source: &str, nodes: &[SegmentNode]) -> String {
    project(source, nodes, Side::Revised)
}

#[derive(Clone, Copy, PartialEq, Eq)]
enum Side {
    Original,
    Revised,
}

fn project(source: &str, nodes: &[SegmentNode], side: Side) -> String {
    let mut out = String::with_capacity(source.len());
    for node in nodes {
        match *node {
            SegmentNode::Plain(span) => out.push_str(span.slice(source)),
            SegmentNode::Deleted { inner, .. } => {
                if side == Side::Original {
                    out.push_str(inner.slice(source));
                }
            }
            SegmentNode::Inserted { inner, .. } => {
                if side == Side::Revised {
                    out.push_str(inner.slice(source));
                }
            }
            SegmentNode::Replacement {
                deleted, inserted, ..
            } => {
                let gap = node.gap().map_or("", |g| g.slice(source));
                match side {
                    Side::Original => {
                        out.push_str(deleted.slice(source));
                        out.push_str(gap);
                    }
                    Side::Revised => {
                        out.push_str(gap);
                        out.push_str(inserted.slice(source));
                    }
                }
            }
        }
    }
    out
}

/// Number of edits of each kind in a segment list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct EditSummary {
    pub deletions: usize,
    pub insertions: usize,
    pub replacements: usize,
}

impl EditSummary {
    pub fn of(segments: &[Segment<'_>]) -> Self {
        segments.iter().fold(Self::default(), |mut acc, seg| {
            match seg {
                Segment::Plain(_) => {}
                Segment::Deleted(_) => acc.deletions += 1,
                Segment::Inserted(_) => acc.insertions += 1,
                Segment::Replacement(..) => acc.replacements += 1,
            }
            acc
        })
    }

    pub fn total(&self) -> usize {
        self.deletions + self.insertions + self.replacements
    }

    /// True when the passage carries no edits at all.
    pub fn is_unchanged(&self) -> bool {
        self.total() == 0
    }
}
