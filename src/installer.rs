use std::fs;
use std::path::{Path, PathBuf};

use crate::embedded::{self, EmbeddedFont, ExtractionDir};
use crate::error::InstallError;
use crate::font::FontFile;
use crate::locator::locate_in_dir;
use crate::platform::PlatformOps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Placement {
    Copied(PathBuf),
    /// A file with the same name was already there and was left untouched.
    AlreadyPresent(PathBuf),
}

impl Placement {
    pub fn path(&self) -> &Path {
        match self {
            Placement::Copied(path) | Placement::AlreadyPresent(path) => path,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontOutcome {
    pub placement: Placement,
    pub registered: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InstallReport {
    pub installed: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub registration_failures: usize,
    pub notified: bool,
}

impl InstallReport {
    fn record(&mut self, outcome: FontOutcome) {
        if !outcome.registered {
            self.registration_failures += 1;
        }
        match outcome.placement {
            Placement::Copied(path) => self.installed.push(path),
            Placement::AlreadyPresent(path) => self.skipped.push(path),
        }
    }

    pub fn total(&self) -> usize {
        self.installed.len() + self.skipped.len()
    }
}

/// Installs one font file into `dest_dir`.
///
/// Both paths are validated before anything is copied. The copy is skipped
/// when `dest_dir` already holds a file of the same name; contents are not
/// compared. Registration is best-effort and only reported through
/// [`FontOutcome::registered`].
pub fn install_font(
    font_path: &Path,
    dest_dir: &Path,
    ops: &dyn PlatformOps,
) -> Result<FontOutcome, InstallError> {
    if !font_path.is_file() {
        return Err(InstallError::MissingFontFile(font_path.to_path_buf()));
    }
    if !dest_dir.is_dir() {
        return Err(InstallError::MissingDestinationDirectory(
            dest_dir.to_path_buf(),
        ));
    }

    let font = FontFile::new(font_path);
    let file_name = font
        .file_name()
        .ok_or_else(|| InstallError::MissingFontFile(font_path.to_path_buf()))?;
    let target = dest_dir.join(file_name);

    let placement = if target.exists() {
        log::debug!("{} already present, skipping copy", target.display());
        Placement::AlreadyPresent(target)
    } else {
        fs::copy(font_path, &target).map_err(|e| InstallError::from_io(&target, e))?;
        log::debug!("Installed {} to {}", font.display_name, target.display());
        Placement::Copied(target)
    };

    let registered = match ops.register(&font, placement.path()) {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    };

    Ok(FontOutcome {
        placement,
        registered,
    })
}

/// Installs every font in order, then notifies the OS once.
///
/// The first placement error aborts the remaining fonts. A failed
/// notification is logged and does not fail the run.
pub fn install_fonts(
    fonts: &[FontFile],
    dest_dir: &Path,
    ops: &dyn PlatformOps,
) -> Result<InstallReport, InstallError> {
    if !dest_dir.is_dir() {
        return Err(InstallError::MissingDestinationDirectory(
            dest_dir.to_path_buf(),
        ));
    }

    let mut report = InstallReport::default();
    for font in fonts {
        let outcome = install_font(&font.path, dest_dir, ops)?;
        report.record(outcome);
    }

    report.notified = match ops.notify() {
        Ok(()) => true,
        Err(e) => {
            log::warn!("{}", e);
            false
        }
    };

    Ok(report)
}

pub fn install_from_dir(
    source_dir: &Path,
    dest_dir: &Path,
    ops: &dyn PlatformOps,
) -> Result<InstallReport, InstallError> {
    let fonts = locate_in_dir(source_dir)?;
    log::info!(
        "Installing {} fonts from {} to {}",
        fonts.len(),
        source_dir.display(),
        dest_dir.display()
    );
    install_fonts(&fonts, dest_dir, ops)
}

pub fn install_embedded(
    fonts: &[EmbeddedFont],
    dest_dir: &Path,
    ops: &dyn PlatformOps,
) -> Result<InstallReport, InstallError> {
    install_embedded_via(fonts, dest_dir, ops, &std::env::temp_dir())
}

/// Like [`install_embedded`], extracting into a fresh directory under
/// `scratch_parent`. The directory is gone when this returns, whatever the
/// outcome.
pub fn install_embedded_via(
    fonts: &[EmbeddedFont],
    dest_dir: &Path,
    ops: &dyn PlatformOps,
    scratch_parent: &Path,
) -> Result<InstallReport, InstallError> {
    if fonts.is_empty() {
        return Err(InstallError::NoEmbeddedFontsFound);
    }

    let extraction = ExtractionDir::create_in(scratch_parent)?;
    let extracted = embedded::extract(fonts, &extraction)?;
    log::info!(
        "Installing {} embedded fonts to {}",
        extracted.len(),
        dest_dir.display()
    );
    install_fonts(&extracted, dest_dir, ops)
}
