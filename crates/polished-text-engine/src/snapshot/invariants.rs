use crate::segment::SegmentNode;
use crate::span::Span;

/// Panics with every violated invariant if `nodes` do not partition `source`.
pub fn check(source: &str, nodes: &[SegmentNode]) {
    let found = violations(source, nodes);
    assert!(
        found.is_empty(),
        "segment invariants violated for {source:?}:\n{}",
        found.join("\n")
    );
}

/// Lists every way `nodes` fail to partition `source`.
pub fn violations(source: &str, nodes: &[SegmentNode]) -> Vec<String> {
    let n = source.len();
    let mut found = vec![];
    let mut expected_start = 0;

    for node in nodes {
        let full = node.full();
        if full.start > full.end || full.end > n {
            found.push(format!("span out of bounds: {full:?} (input len: {n})"));
            continue;
        }
        if full.start != expected_start {
            found.push(format!(
                "{} at {full:?} does not start where the previous node ended ({expected_start})",
                node.kind_name()
            ));
        }
        expected_start = full.end;

        match *node {
            SegmentNode::Plain(sp) => {
                if sp.is_empty() {
                    found.push(format!("empty Plain node at {sp:?}"));
                }
            }
            SegmentNode::Deleted { full, inner } | SegmentNode::Inserted { full, inner } => {
                check_inner(&mut found, node.kind_name(), full, inner);
            }
            SegmentNode::Replacement {
                full,
                deleted,
                inserted,
            } => {
                check_inner(&mut found, "Replacement", full, deleted);
                check_inner(&mut found, "Replacement", full, inserted);
                if deleted.end > inserted.start {
                    found.push(format!(
                        "Replacement halves out of order: {deleted:?} then {inserted:?}"
                    ));
                }
            }
        }
    }

    if expected_start != n {
        found.push(format!(
            "nodes end at {expected_start} but input is {n} bytes long"
        ));
    }
    found
}

fn check_inner(found: &mut Vec<String>, kind: &str, full: Span, inner: Span) {
    if inner.start > inner.end || !full.contains(inner) {
        found.push(format!(
            "{kind} inner span {inner:?} not contained in full span {full:?}"
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::{SegmentOptions, segment_spans};

    #[test]
    fn scanner_output_is_clean() {
        let src = "a ~~b~~**c** d ~~e";
        check(src, &segment_spans(src, &SegmentOptions::default()));
    }

    #[test]
    fn empty_input_with_no_nodes_is_clean() {
        assert!(violations("", &[]).is_empty());
    }

    #[test]
    fn reports_gap() {
        let nodes = [
            SegmentNode::Plain(Span::new(0, 2)),
            SegmentNode::Plain(Span::new(3, 5)),
        ];
        let found = violations("abcde", &nodes);
        assert_eq!(found.len(), 1);
        assert!(found[0].contains("does not start"));
    }

    #[test]
    fn reports_missing_tail() {
        let found = violations("abc", &[SegmentNode::Plain(Span::new(0, 2))]);
        assert_eq!(found, vec!["nodes end at 2 but input is 3 bytes long"]);
    }

    #[test]
    fn reports_escaped_inner_span() {
        let nodes = [SegmentNode::Deleted {
            full: Span::new(0, 6),
            inner: Span::new(2, 7),
        }];
        let found = violations("~~ab~~x", &nodes);
        assert!(found.iter().any(|v| v.contains("not contained")));
    }

    #[test]
    fn reports_empty_plain() {
        let found = violations("", &[SegmentNode::Plain(Span::new(0, 0))]);
        assert!(found.iter().any(|v| v.contains("empty Plain")));
    }
}
