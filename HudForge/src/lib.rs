//! # `HudForge`
//!
//! Helper library behind the TF2 HUD editor: the small, exact transforms the
//! editor applies to HUD schema values before writing them out.
//!
//! ## Modules
//!
//! - **color** - hex to `"R G B A"` conversion, pulsed/dimmed/grayed variants
//! - **text** - `//` comment toggling and tab-tolerant line search
//! - **nested** - nested config mappings: deep merge and path creation
//! - **quality** - item quality color key triples
//! - **schema** - control file-name resolution
//!
//! ## Quick Start
//!
//! ```
//! use hudforge::prelude::*;
//!
//! let rgba = hex_to_rgba("#EBE2CA")?;
//! assert_eq!(rgba, "235 226 202 255");
//! assert_eq!(dim(&rgba)?, "235 226 202 100");
//!
//! assert_eq!(comment_line("\"visible\" \"1\""), "//\"visible\" \"1\"");
//! # Ok::<(), hudforge::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `hudforge` command-line binary

pub mod color;
pub mod error;
pub mod nested;
pub mod quality;
pub mod schema;
pub mod text;

// Re-exports for convenience
pub use error::{Error, Result};

/// Prelude module for common imports
pub mod prelude {
    pub use crate::error::{Error, Result};

    pub use crate::color::{Rgba, dim, gray, hex_to_rgba, parse_hex, pulse};
    pub use crate::nested::{KeyPath, NestedMap, Value, ensure_nested_path, merge, merge_owned};
    pub use crate::quality::{ITEM_RARITIES, QualityColor, QualityVariants, find_quality};
    pub use crate::schema::{ControlFiles, FileNames};
    pub use crate::text::{comment_line, find_lines, uncomment_line};
}

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
