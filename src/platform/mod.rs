//! Per-OS behavior: where fonts live, how they are registered, and how the
//! system is told that its font set changed.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "windows")]
mod windows;

use std::fmt;
use std::path::{Path, PathBuf};

use crate::constants::{LINUX_FONTS_DIR, MACOS_FONTS_DIR};
use crate::error::InstallError;
use crate::font::FontFile;

#[cfg(target_os = "macos")]
pub use self::macos::MacOsOps;

#[cfg(target_os = "linux")]
pub use self::linux::LinuxOps;

#[cfg(target_os = "windows")]
pub use self::windows::{is_user_admin, WindowsOps};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Windows,
    MacOs,
    Linux,
}

impl Platform {
    pub fn current() -> Result<Self, InstallError> {
        Self::from_os(std::env::consts::OS)
    }

    /// Maps a `std::env::consts::OS` style name onto a supported platform.
    pub fn from_os(os: &str) -> Result<Self, InstallError> {
        match os {
            "windows" => Ok(Platform::Windows),
            "macos" => Ok(Platform::MacOs),
            "linux" => Ok(Platform::Linux),
            other => Err(InstallError::UnsupportedPlatform(other.to_string())),
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Platform::Windows => "windows",
            Platform::MacOs => "macos",
            Platform::Linux => "linux",
        };
        f.write_str(name)
    }
}

/// Strategies one platform supplies to the installer.
pub trait PlatformOps {
    fn platform(&self) -> Platform;

    /// The directory fonts are installed into when no destination is given.
    fn fonts_dir(&self) -> Result<PathBuf, InstallError>;

    /// Records an installed font with the OS. Most platforms discover fonts
    /// from the directory alone.
    fn register(&self, _font: &FontFile, _installed: &Path) -> Result<(), InstallError> {
        Ok(())
    }

    /// Tells the OS that the installed font set changed.
    fn notify(&self) -> Result<(), InstallError>;
}

/// Returns the operations for the platform this binary runs on.
pub fn native() -> Result<Box<dyn PlatformOps>, InstallError> {
    match Platform::current()? {
        #[cfg(target_os = "windows")]
        Platform::Windows => Ok(Box::new(WindowsOps)),
        #[cfg(target_os = "macos")]
        Platform::MacOs => Ok(Box::new(MacOsOps)),
        #[cfg(target_os = "linux")]
        Platform::Linux => Ok(Box::new(LinuxOps)),
        #[allow(unreachable_patterns)]
        other => Err(InstallError::UnsupportedPlatform(other.to_string())),
    }
}

/// Default system fonts directory for `platform`.
///
/// The Windows location comes from the shell's known-folder API, so it can only
/// be resolved by a Windows build.
pub fn system_fonts_dir(platform: Platform) -> Result<PathBuf, InstallError> {
    match platform {
        Platform::MacOs => Ok(PathBuf::from(MACOS_FONTS_DIR)),
        Platform::Linux => Ok(PathBuf::from(LINUX_FONTS_DIR)),
        #[cfg(target_os = "windows")]
        Platform::Windows => self::windows::known_fonts_dir(),
        #[cfg(not(target_os = "windows"))]
        Platform::Windows => Err(InstallError::UnsupportedPlatform(platform.to_string())),
    }
}
