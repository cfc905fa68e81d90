use std::collections::BTreeMap;

use serde::Serialize;

use crate::{segment::SegmentNode, span::Span};

#[derive(Serialize)]
pub struct Snap {
    pub segments: Vec<SegmentSnap>,
}

#[derive(Serialize)]
pub struct SegmentSnap {
    pub kind: String,
    pub span: (usize, usize),
    pub text: String,
    pub parts: BTreeMap<String, String>,
}

/// Longest source preview kept per segment.
const PREVIEW: usize = 60;

pub fn normalize(source: &str, nodes: &[SegmentNode]) -> Snap {
    let segments = nodes
        .iter()
        .map(|node| {
            let full = node.full();
            let mut parts = BTreeMap::new();
            match *node {
                SegmentNode::Plain(_) => {}
                SegmentNode::Deleted { inner, .. } | SegmentNode::Inserted { inner, .. } => {
                    parts.insert("inner".into(), preview(source, inner, PREVIEW));
                }
                SegmentNode::Replacement {
                    deleted, inserted, ..
                } => {
                    parts.insert("deleted".into(), preview(source, deleted, PREVIEW));
                    parts.insert("inserted".into(), preview(source, inserted, PREVIEW));
                }
            }
            SegmentSnap {
                kind: node.kind_name().to_string(),
                span: (full.start, full.end),
                text: preview(source, full, PREVIEW),
                parts,
            }
        })
        .collect();

    Snap { segments }
}

/// Extracts text for a span, truncating to at most `max` bytes with "..." suffix
/// if needed. Truncation backs off to a char boundary.
pub fn preview(source: &str, sp: Span, max: usize) -> String {
    let mut s = sp.slice(source).to_string();
    if s.len() > max {
        let mut cut = max;
        while !s.is_char_boundary(cut) {
            cut -= 1;
        }
        s.truncate(cut);
        s.push_str("...");
    }
    s
}
