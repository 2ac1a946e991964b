//! Color module - hex/RGBA conversion and derived HUD color states
//!
//! HUD schema files store colors as `"R G B A"` strings. This module converts
//! hex colors from the editor's picker into that form and derives the pulsed,
//! dimmed and grayed variants used for item quality colors:
//! - `hex_to_rgba` - `#RRGGBB[AA]` / `#RGB` to `"R G B A"`
//! - `pulse`, `dim`, `gray` - transforms over an `"R G B A"` string
//! - `Rgba` - the parsed four-channel value behind those strings

pub mod hex;
pub mod rgba;
pub mod transforms;

pub use hex::parse_hex;
pub use rgba::Rgba;
pub use transforms::{
    DIMMED_ALPHA, GRAY_FACTOR, OPAQUE_ALPHA, PULSE_STEP, dim, gray, hex_to_rgba, pulse,
};
