use crate::segment::Segment;

/// Class attached to the wrapper of a replacement pair.
pub const REPLACEMENT_CLASS: &str = "replacement";

/// Renders segments as an HTML fragment.
///
/// All text is escaped; deleted text goes in `<del>`, inserted text in
/// `<ins>`, and a replacement wraps both in one `<span>`.
pub fn html(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        match *seg {
            Segment::Plain(text) => push_escaped(&mut out, text),
            Segment::Deleted(text) => push_tagged(&mut out, "del", text),
            Segment::Inserted(text) => push_tagged(&mut out, "ins", text),
            Segment::Replacement(deleted, inserted) => {
                out.push_str("<span class=\"");
                out.push_str(REPLACEMENT_CLASS);
                out.push_str("\">");
                push_tagged(&mut out, "del", deleted);
                push_tagged(&mut out, "ins", inserted);
                out.push_str("</span>");
            }
        }
    }
    out
}

fn push_tagged(out: &mut String, tag: &str, text: &str) {
    out.push('<');
    out.push_str(tag);
    out.push('>');
    push_escaped(out, text);
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_escaped(out: &mut String, text: &str) {
    html_escape::encode_text_to_string(text, out);
}
