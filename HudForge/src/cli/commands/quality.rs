//! CLI commands for item quality colors

use anyhow::Context;

use crate::quality::{self, ITEM_RARITIES, QualityKind};

/// One tab-separated row per quality triple
pub fn list(rarities_only: bool, qualities_only: bool) -> Vec<String> {
    let kind = if rarities_only {
        Some(QualityKind::Rarity)
    } else if qualities_only {
        Some(QualityKind::Quality)
    } else {
        None
    };

    ITEM_RARITIES
        .iter()
        .filter(|q| kind.is_none_or(|kind| q.kind == kind))
        .map(|q| format!("{}\t{}\t{}", q.base, q.dimmed, q.greyed_out))
        .collect()
}

/// Derived values for a quality key, as pretty JSON
pub fn derive(key: &str, rgba: &str) -> anyhow::Result<String> {
    let quality =
        quality::find_quality(key).with_context(|| format!("Unknown quality color key: {key}"))?;
    let variants = quality.derive(rgba)?;

    let mut rows = serde_json::Map::new();
    rows.insert(quality.base.to_string(), variants.base.into());
    rows.insert(quality.dimmed.to_string(), variants.dimmed.into());
    rows.insert(quality.greyed_out.to_string(), variants.greyed_out.into());
    Ok(serde_json::to_string_pretty(&rows)?)
}
