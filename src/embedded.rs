//! Fonts compiled into the installer binary by `build.rs`.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::constants::EXTRACTION_DIR_PREFIX;
use crate::error::InstallError;
use crate::font::{is_font_file, FontFile};

#[derive(Debug, Clone, Copy)]
pub struct EmbeddedFont {
    pub name: &'static str,
    pub data: &'static [u8],
}

// Defines `BUNDLED: &[EmbeddedFont]`.
include!(concat!(env!("OUT_DIR"), "/embedded_fonts.rs"));

/// Private scratch directory for extracted fonts, deleted when dropped.
///
/// The name is random and, on Unix, only the current user can enter it.
pub struct ExtractionDir {
    path: PathBuf,
    dir: Option<TempDir>,
}

impl ExtractionDir {
    pub fn create_in(parent: &Path) -> Result<Self, InstallError> {
        let dir = tempfile::Builder::new()
            .prefix(EXTRACTION_DIR_PREFIX)
            .tempdir_in(parent)
            .map_err(|e| InstallError::from_io(parent, e))?;
        let path = dir.path().to_path_buf();
        log::debug!("Created extraction directory {}", path.display());
        Ok(Self {
            path,
            dir: Some(dir),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for ExtractionDir {
    fn drop(&mut self) {
        let Some(dir) = self.dir.take() else {
            return;
        };
        match dir.close() {
            Ok(()) => log::debug!("Removed extraction directory {}", self.path.display()),
            Err(e) => log::warn!(
                "Failed to remove extraction directory {}: {}",
                self.path.display(),
                e
            ),
        }
    }
}

/// Writes every embedded font into `dir` and returns the extracted files.
pub fn extract(fonts: &[EmbeddedFont], dir: &ExtractionDir) -> Result<Vec<FontFile>, InstallError> {
    let mut extracted = Vec::with_capacity(fonts.len());

    for font in fonts {
        // Only the final component is used so a resource name can't escape the
        // extraction directory.
        let file_name = match Path::new(font.name).file_name() {
            Some(name) if is_font_file(Path::new(name)) => name,
            _ => {
                log::warn!("Skipping embedded resource with unusable name {:?}", font.name);
                continue;
            }
        };

        let path = dir.path().join(file_name);
        fs::write(&path, font.data).map_err(|e| InstallError::from_io(&path, e))?;
        log::debug!("Extracted {} ({} bytes)", font.name, font.data.len());
        extracted.push(FontFile::new(path));
    }

    if extracted.is_empty() {
        return Err(InstallError::NoEmbeddedFontsFound);
    }
    Ok(extracted)
}
