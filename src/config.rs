use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{CONFIG_DIR_NAME, CONFIG_FILE_NAME};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub install: InstallSettings,
}

#[derive(Debug, Deserialize, Clone)]
pub struct InstallSettings {
    /// Replaces the platform's default fonts directory.
    pub destination: Option<PathBuf>,
    #[serde(default = "default_require_elevation")]
    pub require_elevation: bool,
}

fn default_require_elevation() -> bool {
    true
}

impl Default for InstallSettings {
    fn default() -> Self {
        Self {
            destination: None,
            require_elevation: default_require_elevation(),
        }
    }
}

impl Config {
    pub fn load() -> Self {
        match config_file_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Config::default();
        }

        let content = match fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("Failed to read config file: {}", e);
                return Config::default();
            }
        };

        match toml::from_str(&content) {
            Ok(config) => {
                log::debug!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Config::default()
            }
        }
    }
}

pub fn config_file_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}
