use std::fmt;
use std::fs;
use std::path::PathBuf;

use crate::config::Config;
use crate::error::InstallError;
use crate::platform::PlatformOps;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    Directory(PathBuf),
    Embedded,
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Directory(dir) => write!(f, "{}", dir.display()),
            Source::Embedded => f.write_str("embedded fonts"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    /// The platform fonts directory, or the configured override.
    System,
    /// The current user's fonts directory.
    User,
    Path(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    pub source: Source,
    pub destination: Destination,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDestination {
    pub path: PathBuf,
    /// Whether this is a machine-wide location that needs elevation.
    pub system: bool,
}

impl Destination {
    pub fn resolve(
        &self,
        config: &Config,
        ops: &dyn PlatformOps,
    ) -> Result<ResolvedDestination, InstallError> {
        match self {
            Destination::Path(path) => Ok(ResolvedDestination {
                path: path.clone(),
                system: false,
            }),
            Destination::User => {
                let path = dirs::font_dir().ok_or(InstallError::NoUserFontsDirectory)?;
                // Unlike the system directory, the per-user one is often absent
                // until the first font lands there.
                fs::create_dir_all(&path).map_err(|e| InstallError::from_io(&path, e))?;
                Ok(ResolvedDestination {
                    path,
                    system: false,
                })
            }
            Destination::System => {
                let path = match &config.install.destination {
                    Some(path) => path.clone(),
                    None => ops.fonts_dir()?,
                };
                Ok(ResolvedDestination { path, system: true })
            }
        }
    }
}
