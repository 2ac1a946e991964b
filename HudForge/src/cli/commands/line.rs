//! CLI commands for text line operations

use std::path::Path;

use anyhow::Context;

use crate::text;

pub fn comment(line: &str) -> String {
    text::comment_line(line)
}

pub fn uncomment(line: &str) -> String {
    text::uncomment_line(line)
}

/// Search a text file line by line
pub fn find(path: &Path, needle: &str) -> anyhow::Result<Vec<usize>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let lines: Vec<&str> = content.lines().collect();

    let matches = text::find_lines(&lines, needle);
    tracing::info!("Found {} of {} lines matching {needle:?}", matches.len(), lines.len());
    Ok(matches)
}
