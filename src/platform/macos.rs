use std::path::PathBuf;

use super::{system_fonts_dir, Platform, PlatformOps};
use crate::error::InstallError;

pub struct MacOsOps;

impl PlatformOps for MacOsOps {
    fn platform(&self) -> Platform {
        Platform::MacOs
    }

    fn fonts_dir(&self) -> Result<PathBuf, InstallError> {
        system_fonts_dir(Platform::MacOs)
    }

    fn notify(&self) -> Result<(), InstallError> {
        // The font daemon watches /Library/Fonts on its own.
        log::debug!("No font change notification needed on macOS");
        Ok(())
    }
}
