//! CLI command for merging JSON configs

use std::path::Path;

use crate::error::Result;
use crate::nested::{self, NestedMap};

/// Load two JSON files and merge the second into the first
pub fn merge_files(target: &Path, source: &Path) -> Result<NestedMap> {
    let mut merged = load(target)?;
    let incoming = load(source)?;
    nested::merge_owned(&mut merged, incoming)?;
    Ok(merged)
}

fn load(path: &Path) -> Result<NestedMap> {
    let content = std::fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn execute(
    target: &Path,
    source: &Path,
    output: Option<&Path>,
    compact: bool,
) -> anyhow::Result<()> {
    tracing::info!("Merging {:?} into {:?}", source, target);
    let merged = merge_files(target, source)?;

    let json = if compact {
        serde_json::to_string(&merged)?
    } else {
        serde_json::to_string_pretty(&merged)?
    };

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            tracing::info!("Wrote merged config to {:?}", path);
        }
        None => println!("{json}"),
    }
    Ok(())
}
