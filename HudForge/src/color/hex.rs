//! Hex color parsing

use crate::error::{Error, Result};

use super::rgba::Rgba;
use super::transforms::OPAQUE_ALPHA;

/// Parse a hex color into its four channels.
///
/// Accepted forms (leading `#` optional, surrounding whitespace ignored):
/// * `#RGB` - each digit doubled, alpha 255
/// * `#RRGGBB` - alpha 255
/// * `#RRGGBBAA`
pub fn parse_hex(hex: &str) -> Result<Rgba> {
    let trimmed = hex.trim();
    let raw = trimmed.strip_prefix('#').unwrap_or(trimmed);

    if !raw.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(Error::invalid_color(hex, "expected hex digits"));
    }

    match raw.len() {
        3 => {
            let expanded: String = raw.chars().flat_map(|c| [c, c]).collect();
            parse_channels(&expanded, hex, false)
        }
        6 => parse_channels(raw, hex, false),
        8 => parse_channels(raw, hex, true),
        len => Err(Error::invalid_color(
            hex,
            format!("expected 3, 6 or 8 hex digits, found {len}"),
        )),
    }
}

/// Read `RRGGBB` or `RRGGBBAA` out of an already validated digit string.
fn parse_channels(raw: &str, input: &str, has_alpha: bool) -> Result<Rgba> {
    let channel = |index: usize| -> Result<i32> {
        let start = index * 2;
        u8::from_str_radix(&raw[start..start + 2], 16)
            .map(i32::from)
            .map_err(|_| Error::invalid_color(input, "expected hex digits"))
    };

    let alpha = if has_alpha { channel(3)? } else { OPAQUE_ALPHA };
    Ok(Rgba::new(channel(0)?, channel(1)?, channel(2)?, alpha))
}
