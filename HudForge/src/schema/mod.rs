//! HUD schema control helpers
//!
//! The editor's schema loader owns parsing; this module only interprets the
//! file-target fields of a control.

mod control;

pub use control::{ControlFiles, FileNames, RES_EXTENSION};
