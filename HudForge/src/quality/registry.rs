//! Item quality registry - the scheme color keys that come in base/dimmed/greyed triples

/// Which family a quality color belongs to, for UI grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QualityKind {
    /// Item quality (Normal, Unique, Strange, ...)
    Quality,
    /// Decorated weapon rarity tier
    Rarity,
}

/// The three scheme color keys describing one quality color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QualityColor {
    /// Key of the base color (e.g., "`QualityColorUnique`")
    pub base: &'static str,
    /// Key of the dimmed variant (e.g., "`DimmQualityColorUnique`")
    pub dimmed: &'static str,
    /// Key of the greyed-out variant (e.g., "`QualityColorUnique_GreyedOut`")
    pub greyed_out: &'static str,
    pub kind: QualityKind,
}

/// Every quality color the editor keeps in sync, in scheme file order
pub const ITEM_RARITIES: &[QualityColor; RARITY_COUNT] = &[
    // Item qualities (10)
    QualityColor {
        base: "QualityColorNormal",
        dimmed: "DimmQualityColorNormal",
        greyed_out: "QualityColorNormal_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorUnique",
        dimmed: "DimmQualityColorUnique",
        greyed_out: "QualityColorUnique_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorStrange",
        dimmed: "DimmQualityColorStrange",
        greyed_out: "QualityColorStrange_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorVintage",
        dimmed: "DimmQualityColorVintage",
        greyed_out: "QualityColorVintage_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorHaunted",
        dimmed: "DimmQualityColorHaunted",
        greyed_out: "QualityColorHaunted_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorrarity1",
        dimmed: "DimmQualityColorrarity1",
        greyed_out: "QualityColorrarity1_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorCollectors",
        dimmed: "DimmQualityColorCollectors",
        greyed_out: "QualityColorCollectors_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorrarity4",
        dimmed: "DimmQualityColorrarity4",
        greyed_out: "QualityColorrarity4_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorCommunity",
        dimmed: "DimmQualityColorCommunity",
        greyed_out: "QualityColorCommunity_GreyedOut",
        kind: QualityKind::Quality,
    },
    QualityColor {
        base: "QualityColorDeveloper",
        dimmed: "DimmQualityColorDeveloper",
        greyed_out: "QualityColorDeveloper_GreyedOut",
        kind: QualityKind::Quality,
    },
    // Item rarity tiers (6) - decorated weapons
    QualityColor {
        base: "ItemRarityCommon",
        dimmed: "DimmItemRarityCommon",
        greyed_out: "ItemRarityCommon_GreyedOut",
        kind: QualityKind::Rarity,
    },
    QualityColor {
        base: "ItemRarityUncommon",
        dimmed: "DimmItemRarityUncommon",
        greyed_out: "ItemRarityUncommon_GreyedOut",
        kind: QualityKind::Rarity,
    },
    QualityColor {
        base: "ItemRarityRare",
        dimmed: "DimmItemRarityRare",
        greyed_out: "ItemRarityRare_GreyedOut",
        kind: QualityKind::Rarity,
    },
    QualityColor {
        base: "ItemRarityMythical",
        dimmed: "DimmItemRarityMythical",
        greyed_out: "ItemRarityMythical_GreyedOut",
        kind: QualityKind::Rarity,
    },
    QualityColor {
        base: "ItemRarityLegendary",
        dimmed: "DimmItemRarityLegendary",
        greyed_out: "ItemRarityLegendary_GreyedOut",
        kind: QualityKind::Rarity,
    },
    QualityColor {
        base: "ItemRarityAncient",
        dimmed: "DimmItemRarityAncient",
        greyed_out: "ItemRarityAncient_GreyedOut",
        kind: QualityKind::Rarity,
    },
];

/// Total number of quality colors
pub const RARITY_COUNT: usize = 16;

/// Get quality colors of one kind, in registry order
pub fn qualities_by_kind(kind: QualityKind) -> impl Iterator<Item = &'static QualityColor> {
    ITEM_RARITIES.iter().filter(move |q| q.kind == kind)
}

/// Find a quality color by any of its three keys
#[must_use]
pub fn find_quality(key: &str) -> Option<&'static QualityColor> {
    ITEM_RARITIES
        .iter()
        .find(|q| q.base == key || q.dimmed == key || q.greyed_out == key)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_size() {
        assert_eq!(ITEM_RARITIES.len(), RARITY_COUNT);
        assert_eq!(qualities_by_kind(QualityKind::Quality).count(), 10);
        assert_eq!(qualities_by_kind(QualityKind::Rarity).count(), 6);
    }

    #[test]
    fn test_naming_convention() {
        for quality in ITEM_RARITIES {
            assert_eq!(quality.dimmed, format!("Dimm{}", quality.base));
            assert_eq!(quality.greyed_out, format!("{}_GreyedOut", quality.base));
        }
    }

    #[test]
    fn test_registry_order() {
        assert_eq!(ITEM_RARITIES[0].base, "QualityColorNormal");
        assert_eq!(ITEM_RARITIES[5].base, "QualityColorrarity1");
        assert_eq!(ITEM_RARITIES[10].base, "ItemRarityCommon");
        assert_eq!(ITEM_RARITIES[15].base, "ItemRarityAncient");
    }

    #[test]
    fn test_find_quality_by_any_key() {
        let strange = find_quality("QualityColorStrange").unwrap();
        assert_eq!(find_quality("DimmQualityColorStrange"), Some(strange));
        assert_eq!(find_quality("QualityColorStrange_GreyedOut"), Some(strange));
        assert_eq!(strange.kind, QualityKind::Quality);
    }

    #[test]
    fn test_find_quality_is_case_sensitive() {
        assert!(find_quality("qualitycolorstrange").is_none());
        assert!(find_quality("QualityColorRarity1").is_none());
    }
}
