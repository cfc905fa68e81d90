use crate::segment::{
    Segment,
    kinds::{Deletion, Insertion},
};

/// Writes segments back out as annotation markup.
///
/// Replacements are written with no gap between their halves, so for input
/// whose replacements were already adjacent, `markup(&segment(s)) == s`.
pub fn markup(segments: &[Segment<'_>]) -> String {
    let del = Deletion::TEXT;
    let ins = Insertion::TEXT;
    let mut out = String::new();
    for seg in segments {
        match *seg {
            Segment::Plain(text) => out.push_str(text),
            Segment::Deleted(text) => wrap(&mut out, del, text),
            Segment::Inserted(text) => wrap(&mut out, ins, text),
            Segment::Replacement(deleted, inserted) => {
                wrap(&mut out, del, deleted);
                wrap(&mut out, ins, inserted);
            }
        }
    }
    out
}

fn wrap(out: &mut String, delim: &str, text: &str) {
    out.push_str(delim);
    out.push_str(text);
    out.push_str(delim);
}
