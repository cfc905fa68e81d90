use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Whitespace tolerated between a deletion and the insertion that replaces it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PairGap {
    /// `~~a~~**b**` pairs, `~~a~~ **b**` does not.
    Adjacent,
    /// Only U+0020 SPACE and U+0009 TAB.
    SpacesAndTabs,
    /// Any Unicode whitespace except line terminators.
    #[default]
    InlineWhitespace,
}

impl PairGap {
    /// Returns true if `c` may sit between the two halves of a replacement.
    pub fn allows(self, c: char) -> bool {
        match self {
            PairGap::Adjacent => false,
            PairGap::SpacesAndTabs => c == ' ' || c == '\t',
            PairGap::InlineWhitespace => c.is_whitespace() && !is_line_terminator(c),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PairGap::Adjacent => "adjacent",
            PairGap::SpacesAndTabs => "spaces-and-tabs",
            PairGap::InlineWhitespace => "inline-whitespace",
        }
    }
}

/// Characters that end a line: LF, VT, FF, CR, NEL, LS and PS.
fn is_line_terminator(c: char) -> bool {
    matches!(
        c,
        '\n' | '\u{0b}' | '\u{0c}' | '\r' | '\u{85}' | '\u{2028}' | '\u{2029}'
    )
}

impl fmt::Display for PairGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PairGap {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "adjacent" => Ok(PairGap::Adjacent),
            "spaces-and-tabs" => Ok(PairGap::SpacesAndTabs),
            "inline-whitespace" => Ok(PairGap::InlineWhitespace),
            other => Err(format!(
                "unknown pair gap '{other}' (expected adjacent, spaces-and-tabs or inline-whitespace)"
            )),
        }
    }
}

/// What the [`Segment`](super::Segment) view does with spans whose content is empty.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptySpans {
    /// `~~~~` becomes `Deleted("")`, `****` becomes `Inserted("")`.
    #[default]
    Keep,
    /// Empty deletions and insertions vanish; a replacement with one empty
    /// side collapses to the standalone segment of the other side.
    Drop,
}

/// Whether span content may run across line breaks.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SpanLines {
    /// Content may contain `\n`.
    #[default]
    Multi,
    /// A `\n` before the closing delimiter leaves the opener as plain text.
    Single,
}

/// Tunables for [`segment_with`](super::segment_with).
///
/// The defaults reproduce the behaviour of [`segment`](super::segment).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct SegmentOptions {
    pub pair_gap: PairGap,
    pub empty_spans: EmptySpans,
    pub span_lines: SpanLines,
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(PairGap::Adjacent, ' ', false)]
    #[case(PairGap::SpacesAndTabs, ' ', true)]
    #[case(PairGap::SpacesAndTabs, '\t', true)]
    #[case(PairGap::SpacesAndTabs, '\u{a0}', false)]
    #[case(PairGap::InlineWhitespace, '\u{a0}', true)]
    #[case(PairGap::InlineWhitespace, '\u{3000}', true)]
    #[case(PairGap::InlineWhitespace, '\n', false)]
    #[case(PairGap::InlineWhitespace, '\r', false)]
    #[case(PairGap::InlineWhitespace, '\u{0b}', false)]
    #[case(PairGap::InlineWhitespace, '\u{0c}', false)]
    #[case(PairGap::InlineWhitespace, '\u{85}', false)]
    #[case(PairGap::InlineWhitespace, '\u{2028}', false)]
    #[case(PairGap::InlineWhitespace, '\u{2029}', false)]
    #[case(PairGap::InlineWhitespace, '\u{2003}', true)]
    #[case(PairGap::InlineWhitespace, 'x', false)]
    fn pair_gap_allows(#[case] gap: PairGap, #[case] c: char, #[case] expected: bool) {
        assert_eq!(gap.allows(c), expected);
    }

    #[rstest]
    #[case(PairGap::Adjacent)]
    #[case(PairGap::SpacesAndTabs)]
    #[case(PairGap::InlineWhitespace)]
    fn pair_gap_parses_its_own_name(#[case] gap: PairGap) {
        assert_eq!(gap.to_string().parse::<PairGap>(), Ok(gap));
    }

    #[test]
    fn pair_gap_rejects_unknown_name() {
        let err = "newlines".parse::<PairGap>().unwrap_err();
        assert!(err.contains("newlines"));
    }

    #[test]
    fn defaults() {
        let opts = SegmentOptions::default();
        assert_eq!(opts.pair_gap, PairGap::InlineWhitespace);
        assert_eq!(opts.empty_spans, EmptySpans::Keep);
        assert_eq!(opts.span_lines, SpanLines::Multi);
    }
}
