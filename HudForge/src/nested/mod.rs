//! Nested string-keyed mappings for HUD configuration
//!
//! HUD schemas and presets are trees of string keys whose values are either
//! scalars or further mappings. This module provides the tree type and the
//! two operations the editor needs on it.
//!
//! # Merging
//!
//! ```
//! use hudforge::nested::{merge, NestedMap};
//!
//! let mut preset: NestedMap = serde_json::from_str(r#"{"Colors": {"Health": "255 255 255 255"}}"#)?;
//! let user: NestedMap = serde_json::from_str(r#"{"Colors": {"Health": "0 255 0 255"}, "Font": "TF2"}"#)?;
//!
//! merge(&mut preset, &user)?;
//! assert_eq!(preset["Font"], hudforge::nested::Value::from("TF2"));
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Building paths
//!
//! ```
//! use hudforge::nested::{ensure_nested_path, NestedMap, Value};
//!
//! let mut scheme = NestedMap::new();
//! let colors = ensure_nested_path(&mut scheme, ["Scheme", "Colors"])?;
//! colors.insert("QualityColorNormal".to_string(), Value::from("178 178 178 255"));
//! # Ok::<(), hudforge::Error>(())
//! ```
//!
//! Both functions take the target by `&mut`, so concurrent callers must
//! synchronize access to a shared tree themselves.

mod merge;
mod path;
mod types;

pub use merge::{merge, merge_owned};
pub use path::ensure_nested_path;
pub use types::{KeyPath, NestedMap, Value};
