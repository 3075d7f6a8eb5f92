use std::io;
use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum InstallError {
    #[error("Source directory not found: {}", .0.display())]
    MissingSourceDirectory(PathBuf),
    #[error("Destination directory not found: {}", .0.display())]
    MissingDestinationDirectory(PathBuf),
    #[error("Font file not found: {}", .0.display())]
    MissingFontFile(PathBuf),
    #[error("No font files found in {}", .0.display())]
    NoFontFilesFound(PathBuf),
    #[error("No embedded font resources found in this installer")]
    NoEmbeddedFontsFound,
    #[error("Platform not supported: {0}")]
    UnsupportedPlatform(String),
    #[error("Access denied while writing {}: {source}", .path.display())]
    UnauthorizedAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to register font {name}: {reason}")]
    Registry { name: String, reason: String },
    #[error("Failed to notify the system of font changes: {0}")]
    Notification(String),
    #[error("Administrator or root privileges are required to install into {}", .0.display())]
    NotElevated(PathBuf),
    #[error("No per-user fonts directory on this platform")]
    NoUserFontsDirectory,
}

impl InstallError {
    /// Wraps an I/O error, singling out permission failures.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        if source.kind() == io::ErrorKind::PermissionDenied {
            InstallError::UnauthorizedAccess { path, source }
        } else {
            InstallError::Io { path, source }
        }
    }
}
