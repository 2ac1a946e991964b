//! String-level color transforms used by the HUD schema writer
//!
//! Every function here takes and returns the `"R G B A"` wire form so the
//! editor can feed values straight from a schema file.

use crate::error::Result;

use super::hex::parse_hex;
use super::rgba::Rgba;

/// Alpha subtracted by [`pulse`].
pub const PULSE_STEP: i32 = 50;

/// Alpha assigned by [`dim`].
pub const DIMMED_ALPHA: i32 = 100;

/// Channel multiplier applied by [`gray`].
pub const GRAY_FACTOR: f64 = 0.25;

/// Alpha for hex colors without an alpha channel, and for [`gray`] output.
pub const OPAQUE_ALPHA: i32 = 255;

/// Convert a hex color (e.g., `#EBE2CA`) to an RGBA string (e.g., `"235 226 202 255"`).
pub fn hex_to_rgba(hex: &str) -> Result<String> {
    Ok(parse_hex(hex)?.to_string())
}

/// Get a pulsed color by lowering alpha by 50 (no-op once alpha is below 50).
pub fn pulse(rgba: &str) -> Result<String> {
    Ok(rgba.parse::<Rgba>()?.pulsed().to_string())
}

/// Get a dimmed color by setting alpha to 100.
pub fn dim(rgba: &str) -> Result<String> {
    Ok(rgba.parse::<Rgba>()?.dimmed().to_string())
}

/// Get a grayed color by reducing each color channel by 75%.
pub fn gray(rgba: &str) -> Result<String> {
    Ok(rgba.parse::<Rgba>()?.grayed().to_string())
}
