//! CLI commands for color conversion

use crate::color::{self, Rgba};

/// Convert a hex color to `"R G B A"`
pub fn rgba(hex: &str) -> anyhow::Result<String> {
    Ok(color::hex_to_rgba(hex)?)
}

pub fn pulse(rgba: &str) -> anyhow::Result<String> {
    Ok(color::pulse(rgba)?)
}

pub fn dim(rgba: &str) -> anyhow::Result<String> {
    Ok(color::dim(rgba)?)
}

pub fn gray(rgba: &str) -> anyhow::Result<String> {
    Ok(color::gray(rgba)?)
}

/// Convert `"R G B A"` to `#RRGGBBAA`
pub fn hex(rgba: &str) -> anyhow::Result<String> {
    Ok(rgba.parse::<Rgba>()?.to_hex()?)
}
