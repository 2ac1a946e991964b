/// Get the indices of every line containing `needle`.
///
/// A line also matches when it contains `needle` with each space replaced by
/// a tab, since `.res` files mix both separators between keys and values.
/// Indices are zero-based and ascending.
pub fn find_lines<S: AsRef<str>>(lines: &[S], needle: &str) -> Vec<usize> {
    let tabbed = needle.replace(' ', "\t");

    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| {
            let line: &str = line.as_ref();
            line.contains(needle) || line.contains(&tabbed)
        })
        .map(|(index, _)| index)
        .collect()
}
