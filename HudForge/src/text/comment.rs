/// Comment marker used by Valve `.res` and scheme files.
pub const COMMENT_MARKER: &str = "//";

/// Add a comment tag (`//`) to the beginning of a text line.
///
/// Existing markers are stripped first, so commenting an already commented
/// line is a no-op.
pub fn comment_line(line: &str) -> String {
    format!("{COMMENT_MARKER}{}", uncomment_line(line))
}

/// Remove all comment tags (`//`) from a text line.
///
/// This strips every occurrence, not only a leading one: a URL inside the
/// line loses its `//` as well.
pub fn uncomment_line(line: &str) -> String {
    line.replace(COMMENT_MARKER, "")
}
