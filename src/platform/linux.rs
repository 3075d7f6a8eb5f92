//! Linux: fontconfig scans the fonts directories, so placement plus a cache
//! refresh is all that is needed.

use std::path::PathBuf;
use std::process::Command;

use super::{system_fonts_dir, Platform, PlatformOps};
use crate::constants::FONT_CACHE_TOOL;
use crate::error::InstallError;

pub struct LinuxOps;

impl PlatformOps for LinuxOps {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn fonts_dir(&self) -> Result<PathBuf, InstallError> {
        system_fonts_dir(Platform::Linux)
    }

    fn notify(&self) -> Result<(), InstallError> {
        let tool = which::which(FONT_CACHE_TOOL)
            .map_err(|e| InstallError::Notification(format!("{FONT_CACHE_TOOL}: {e}")))?;

        log::debug!("Refreshing font cache with {}", tool.display());
        let status = Command::new(&tool)
            .arg("-f")
            .status()
            .map_err(|e| InstallError::Notification(format!("{}: {e}", tool.display())))?;

        if status.success() {
            log::info!("Font cache refreshed");
            Ok(())
        } else {
            Err(InstallError::Notification(format!(
                "{FONT_CACHE_TOOL} exited with {status}"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::font::FontFile;

    #[test]
    fn test_linux_fonts_dir() {
        assert_eq!(
            LinuxOps.fonts_dir().unwrap(),
            PathBuf::from("/usr/share/fonts/")
        );
    }

    #[test]
    fn test_registration_is_a_no_op() {
        let font = FontFile::new("/tmp/Some-Font.ttf");
        assert!(LinuxOps
            .register(&font, std::path::Path::new("/usr/share/fonts/Some-Font.ttf"))
            .is_ok());
    }
}
