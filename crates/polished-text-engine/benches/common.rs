// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
#[allow(dead_code)]
pub fn generate_annotated_essay(paragraphs: usize) -> String {
    let base = "In my opinion, ~~technology have~~ **technology has** changed the way \
                students ~~learns~~**learn**. Many ~~peoples~~ **people** believe that \
                **online** classes are ~~more better~~ **better** than ~~traditional~~ ones, \
                but I ~~am not agree~~ **disagree** because ~~of~~ teachers ~~gives~~**give** \
                feedback ~~directly~~.\n\n";
    base.repeat(paragraphs)
}

#[allow(dead_code)]
pub fn generate_unterminated_markers(len: usize) -> String {
    let mut content = String::with_capacity(len + 2);
    content.push_str("~~");
    while content.len() < len {
        content.push_str("text * ~ ");
    }
    content
}
