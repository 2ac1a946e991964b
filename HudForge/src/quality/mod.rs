//! Quality module - item quality color keys and their derived variants
//!
//! Item quality colors in a HUD's client scheme come in triples: a base color,
//! a dimmed copy and a greyed-out copy. The editor only asks the user for the
//! base color and derives the other two:
//! - `ITEM_RARITIES` - the 16 key triples
//! - `QualityColor::derive` / `write_variants` - fill in the derived values

pub mod registry;
pub mod variants;

pub use registry::{ITEM_RARITIES, QualityColor, QualityKind, RARITY_COUNT};
pub use registry::{find_quality, qualities_by_kind};
pub use variants::QualityVariants;
