//! Core types for nested mappings

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A string-keyed mapping whose values may themselves be mappings.
///
/// Insertion order is preserved so a merged preset serializes back out with
/// its keys where the author put them.
pub type NestedMap = IndexMap<String, Value>;

/// A value in a [`NestedMap`].
///
/// Serializes as plain JSON: objects become [`Value::Nested`], everything
/// else (strings, numbers, bools, arrays, null) becomes [`Value::Scalar`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// A sub-mapping.
    Nested(NestedMap),
    /// Any non-mapping value.
    Scalar(serde_json::Value),
}

impl Value {
    /// An empty sub-mapping.
    #[must_use]
    pub fn empty() -> Self {
        Self::Nested(NestedMap::new())
    }

    #[must_use]
    pub fn is_mapping(&self) -> bool {
        matches!(self, Self::Nested(_))
    }

    #[must_use]
    pub fn as_mapping(&self) -> Option<&NestedMap> {
        match self {
            Self::Nested(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    pub fn as_mapping_mut(&mut self) -> Option<&mut NestedMap> {
        match self {
            Self::Nested(map) => Some(map),
            Self::Scalar(_) => None,
        }
    }

    /// The scalar as a string slice, if it is a JSON string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Scalar(serde_json::Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Convert back into a `serde_json::Value`.
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::Nested(map) => serde_json::Value::Object(
                map.into_iter()
                    .map(|(key, value)| (key, value.into_json()))
                    .collect(),
            ),
            Self::Scalar(value) => value,
        }
    }
}

impl From<serde_json::Value> for Value {
    /// Objects (at any depth) become nested mappings.
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Object(object) => Self::Nested(
                object
                    .into_iter()
                    .map(|(key, value)| (key, Self::from(value)))
                    .collect(),
            ),
            other => Self::Scalar(other),
        }
    }
}

impl From<NestedMap> for Value {
    fn from(map: NestedMap) -> Self {
        Self::Nested(map)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(serde_json::Value::String(s.to_string()))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(serde_json::Value::String(s))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Scalar(serde_json::Value::from(n))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Scalar(serde_json::Value::Bool(b))
    }
}

/// Path to a value in a nested mapping, used in error reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct KeyPath {
    /// Keys from the root to the target
    segments: Vec<String>,
}

impl KeyPath {
    #[must_use]
    pub fn root() -> Self {
        Self::default()
    }

    pub fn push(&mut self, segment: &str) {
        self.segments.push(segment.to_string());
    }

    #[must_use]
    pub fn child(&self, segment: &str) -> Self {
        let mut new = self.clone();
        new.push(segment);
        new
    }

    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    #[must_use]
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for KeyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return write!(f, "<root>");
        }
        write!(f, "{}", self.segments.join("/"))
    }
}
