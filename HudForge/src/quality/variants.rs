//! Derived color values for a quality triple

use serde::Serialize;

use crate::color::{Rgba, dim, gray};
use crate::error::Result;
use crate::nested::{NestedMap, Value};

use super::registry::QualityColor;

/// The three `"R G B A"` values written for one quality color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QualityVariants {
    pub base: String,
    pub dimmed: String,
    pub greyed_out: String,
}

impl QualityColor {
    /// Derive the dimmed and greyed-out values from a base `"R G B A"` color.
    pub fn derive(&self, rgba: &str) -> Result<QualityVariants> {
        Ok(QualityVariants {
            base: rgba.parse::<Rgba>()?.to_string(),
            dimmed: dim(rgba)?,
            greyed_out: gray(rgba)?,
        })
    }

    /// Write all three values into a scheme `Colors` mapping, replacing any
    /// existing entries for these keys.
    pub fn write_variants(&self, colors: &mut NestedMap, rgba: &str) -> Result<QualityVariants> {
        let variants = self.derive(rgba)?;
        for (key, value) in [
            (self.base, &variants.base),
            (self.dimmed, &variants.dimmed),
            (self.greyed_out, &variants.greyed_out),
        ] {
            colors.insert(key.to_string(), Value::from(value.as_str()));
        }
        tracing::debug!("Wrote quality variants for {}", self.base);
        Ok(variants)
    }
}
