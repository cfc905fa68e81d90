use crate::span::Span;

use super::{
    cursor::Cursor,
    kinds::{Deletion, Insertion},
    options::{PairGap, SegmentOptions, SpanLines},
    types::SegmentNode,
};

/// Scans annotated text into a sequence of [`SegmentNode`]s.
///
/// # Precedence
/// At every position the scanner tries, in order:
/// 1. a replacement `~~A~~` + gap + `**B**`
/// 2. a standalone deletion `~~A~~`
/// 3. a standalone insertion `**B**`
///
/// and otherwise adds one byte to the pending plain run. Each delimiter pair
/// closes at the nearest matching delimiter, and a consumed match is never
/// revisited.
///
/// # Returns
/// Nodes whose full spans partition `s` exactly, in source order. Empty
/// input gives an empty vector. Unterminated openers stay inside `Plain`.
pub fn segment_spans(s: &str, opts: &SegmentOptions) -> Vec<SegmentNode> {
    let mut cur = Cursor::new(s);
    let mut out = vec![];
    let mut text_start = cur.pos();

    fn flush_text(out: &mut Vec<SegmentNode>, start: usize, end: usize) {
        if end > start {
            out.push(SegmentNode::Plain(Span { start, end }));
        }
    }

    while !cur.eof() {
        if let Some(node) = try_parse_edit(&mut cur, opts) {
            let full = node.full();
            log::trace!("{} at {}..{}", node.kind_name(), full.start, full.end);
            flush_text(&mut out, text_start, full.start);
            text_start = full.end;
            out.push(node);
            continue;
        }
        cur.bump();
    }

    flush_text(&mut out, text_start, cur.pos());
    out
}

/// Tries every edit construct in precedence order at the current position.
fn try_parse_edit(cur: &mut Cursor<'_>, opts: &SegmentOptions) -> Option<SegmentNode> {
    if let Some(node) = try_parse_replacement(cur, opts) {
        return Some(node);
    }
    if let Some(node) = try_parse_deletion(cur, opts.span_lines) {
        return Some(node);
    }
    try_parse_insertion(cur, opts.span_lines)
}

/// Attempts to parse a delimited span `MARK inner MARK` at the current position.
///
/// Returns `(full, inner)` and leaves the cursor after the closing delimiter.
/// On failure, cursor position is restored.
fn try_parse_delimited(
    cur: &mut Cursor<'_>,
    mark: &[u8],
    lines: SpanLines,
) -> Option<(Span, Span)> {
    if !cur.starts_with(mark) {
        return None;
    }

    let start = cur.pos();
    let inner_start = start + mark.len();
    let saved = cur.clone();
    cur.bump_n(mark.len());

    let Some(inner_end) = cur.find(mark) else {
        log::debug!(
            "unterminated {} at {start}, kept as plain text",
            String::from_utf8_lossy(mark)
        );
        *cur = saved;
        return None;
    };

    if lines == SpanLines::Single && cur.s.as_bytes()[inner_start..inner_end].contains(&b'\n') {
        log::debug!(
            "{} at {start} closes on a later line, kept as plain text",
            String::from_utf8_lossy(mark)
        );
        *cur = saved;
        return None;
    }

    cur.seek(inner_end + mark.len());
    Some((
        Span {
            start,
            end: cur.pos(),
        },
        Span {
            start: inner_start,
            end: inner_end,
        },
    ))
}

/// Attempts to parse a deletion directly followed by an insertion.
///
/// Only characters accepted by [`PairGap::allows`] may separate the halves.
/// On failure, cursor position is restored so the deletion can be tried alone.
fn try_parse_replacement(cur: &mut Cursor<'_>, opts: &SegmentOptions) -> Option<SegmentNode> {
    if !cur.starts_with(Deletion::MARK) {
        return None;
    }

    let saved = cur.clone();
    let (del_full, deleted) = try_parse_delimited(cur, Deletion::MARK, opts.span_lines)?;

    skip_gap(cur, opts.pair_gap);

    let Some((ins_full, inserted)) = try_parse_delimited(cur, Insertion::MARK, opts.span_lines)
    else {
        *cur = saved;
        return None;
    };

    Some(SegmentNode::Replacement {
        full: Span {
            start: del_full.start,
            end: ins_full.end,
        },
        deleted,
        inserted,
    })
}

fn try_parse_deletion(cur: &mut Cursor<'_>, lines: SpanLines) -> Option<SegmentNode> {
    let (full, inner) = try_parse_delimited(cur, Deletion::MARK, lines)?;
    Some(SegmentNode::Deleted { full, inner })
}

fn try_parse_insertion(cur: &mut Cursor<'_>, lines: SpanLines) -> Option<SegmentNode> {
    let (full, inner) = try_parse_delimited(cur, Insertion::MARK, lines)?;
    Some(SegmentNode::Inserted { full, inner })
}

/// Advances over characters the gap policy tolerates between a pair.
fn skip_gap(cur: &mut Cursor<'_>, gap: PairGap) {
    while let Some(c) = cur.peek_char() {
        if !gap.allows(c) {
            break;
        }
        cur.bump_n(c.len_utf8());
    }
}
