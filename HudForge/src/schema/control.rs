use serde::{Deserialize, Serialize};

/// Extension stripped from single file targets.
pub const RES_EXTENSION: &str = ".res";

/// File targets of a schema control, as found in HUD schema JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ControlFiles {
    /// A single target file (e.g., "resource/ui/hudplayerhealth.res")
    #[serde(default)]
    pub file_name: Option<String>,
    /// One file per combo box option
    #[serde(default)]
    pub combo_files: Vec<String>,
}

/// Resolved file targets of a control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileNames {
    Single(String),
    Combo(Vec<String>),
}

impl ControlFiles {
    /// Get the file name(s) a control writes to.
    ///
    /// A non-blank `FileName` wins, with every `.res` removed; otherwise the
    /// combo file list is returned as-is.
    #[must_use]
    pub fn file_names(&self) -> FileNames {
        match self.file_name.as_deref() {
            Some(name) if !name.trim().is_empty() => {
                FileNames::Single(name.replace(RES_EXTENSION, ""))
            }
            _ => FileNames::Combo(self.combo_files.clone()),
        }
    }
}
