//! The `"R G B A"` color value

use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

use super::transforms::{DIMMED_ALPHA, GRAY_FACTOR, OPAQUE_ALPHA, PULSE_STEP};

/// A four-channel color as written into HUD schema files.
///
/// Channels are conventionally 0-255 but are not range checked: any integer
/// the schema contains round-trips unchanged through `FromStr`/`Display`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: i32,
    pub g: i32,
    pub b: i32,
    pub a: i32,
}

impl Rgba {
    #[must_use]
    pub const fn new(r: i32, g: i32, b: i32, a: i32) -> Self {
        Self { r, g, b, a }
    }

    /// Drop alpha by [`PULSE_STEP`] unless it is already below the step.
    #[must_use]
    pub const fn pulsed(self) -> Self {
        let a = if self.a >= PULSE_STEP {
            self.a - PULSE_STEP
        } else {
            self.a
        };
        Self { a, ..self }
    }

    /// Same color with alpha forced to [`DIMMED_ALPHA`].
    #[must_use]
    pub const fn dimmed(self) -> Self {
        Self {
            a: DIMMED_ALPHA,
            ..self
        }
    }

    /// Quarter-brightness color channels, fully opaque.
    ///
    /// Each channel is scaled by [`GRAY_FACTOR`] and truncated toward zero;
    /// the original alpha is discarded.
    #[must_use]
    pub fn grayed(self) -> Self {
        let scale = |c: i32| (f64::from(c) * GRAY_FACTOR) as i32;
        Self::new(scale(self.r), scale(self.g), scale(self.b), OPAQUE_ALPHA)
    }

    /// Format as `#RRGGBBAA` (uppercase).
    ///
    /// Fails if any channel falls outside 0-255.
    pub fn to_hex(&self) -> Result<String> {
        let byte = |c: i32| {
            u8::try_from(c).map_err(|_| {
                Error::invalid_color(&self.to_string(), format!("channel {c} is outside 0-255"))
            })
        };
        Ok(format!(
            "#{:02X}{:02X}{:02X}{:02X}",
            byte(self.r)?,
            byte(self.g)?,
            byte(self.b)?,
            byte(self.a)?
        ))
    }
}

impl FromStr for Rgba {
    type Err = Error;

    /// Parse exactly four single-space separated integers.
    fn from_str(s: &str) -> Result<Self> {
        let fields: Vec<&str> = s.trim().split(' ').collect();
        let [r, g, b, a] = fields.as_slice() else {
            return Err(Error::invalid_color(
                s,
                format!("expected 4 space-separated channels, found {}", fields.len()),
            ));
        };

        let channel = |field: &str| -> Result<i32> {
            field
                .parse::<i32>()
                .map_err(|_| Error::invalid_color(s, format!("channel '{field}' is not an integer")))
        };

        Ok(Self::new(channel(r)?, channel(g)?, channel(b)?, channel(a)?))
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} {}", self.r, self.g, self.b, self.a)
    }
}
