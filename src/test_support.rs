use std::cell::{Cell, RefCell};
use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

use crate::error::InstallError;
use crate::font::FontFile;
use crate::platform::{Platform, PlatformOps};

/// Directory under the OS temp dir that is removed when dropped.
pub struct ScratchDir {
    dir: TempDir,
}

impl ScratchDir {
    pub fn new(label: &str) -> Self {
        let dir = tempfile::Builder::new()
            .prefix(&format!("font-installer-test-{}-", label))
            .tempdir()
            .unwrap();
        Self { dir }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &[u8]) -> PathBuf {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, contents).unwrap();
        path
    }
}

/// Platform operations that record calls instead of touching the OS.
pub struct RecordingOps {
    pub fonts_dir: PathBuf,
    pub registered: RefCell<Vec<String>>,
    pub notifications: Cell<usize>,
    pub fail_registration: bool,
    pub fail_notify: bool,
}

impl RecordingOps {
    pub fn new(fonts_dir: impl Into<PathBuf>) -> Self {
        Self {
            fonts_dir: fonts_dir.into(),
            registered: RefCell::new(Vec::new()),
            notifications: Cell::new(0),
            fail_registration: false,
            fail_notify: false,
        }
    }
}

impl PlatformOps for RecordingOps {
    fn platform(&self) -> Platform {
        Platform::Linux
    }

    fn fonts_dir(&self) -> Result<PathBuf, InstallError> {
        Ok(self.fonts_dir.clone())
    }

    fn register(&self, font: &FontFile, _installed: &Path) -> Result<(), InstallError> {
        if self.fail_registration {
            return Err(InstallError::Registry {
                name: font.display_name.clone(),
                reason: "access denied".into(),
            });
        }
        self.registered.borrow_mut().push(font.registry_value_name());
        Ok(())
    }

    fn notify(&self) -> Result<(), InstallError> {
        self.notifications.set(self.notifications.get() + 1);
        if self.fail_notify {
            return Err(InstallError::Notification("no font cache tool".into()));
        }
        Ok(())
    }
}
