use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use crate::constants::{FONT_EXTENSIONS, TRUETYPE_SUFFIX};

/// A font file on disk together with the name it is shown under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontFile {
    pub path: PathBuf,
    pub display_name: String,
}

impl FontFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let display_name = display_name(&path);
        Self { path, display_name }
    }

    pub fn file_name(&self) -> Option<&OsStr> {
        self.path.file_name()
    }

    /// Name of the value written under the Windows fonts registry key.
    pub fn registry_value_name(&self) -> String {
        if is_font_file(&self.path) {
            format!("{}{}", self.display_name, TRUETYPE_SUFFIX)
        } else {
            self.display_name.clone()
        }
    }
}

/// Derives a display name from a file name: the extension is dropped and every
/// `-` or `_` becomes a space.
pub fn display_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().replace(['-', '_'], " "))
        .unwrap_or_default()
}

pub fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(OsStr::to_str)
        .map(|ext| {
            FONT_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}
