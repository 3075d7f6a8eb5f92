//! Windows: fonts are listed in the registry, loaded through GDI, and running
//! applications learn about them from a broadcast `WM_FONTCHANGE`.

use std::ffi::OsStr;
use std::os::windows::ffi::OsStrExt;
use std::path::{Path, PathBuf};

use windows::core::{PCWSTR, PWSTR};
use windows::Win32::Foundation::{LPARAM, WPARAM};
use windows::Win32::Graphics::Gdi::AddFontResourceW;
use windows::Win32::System::Com::CoTaskMemFree;
use windows::Win32::UI::Shell::{FOLDERID_Fonts, IsUserAnAdmin, SHGetKnownFolderPath, KF_FLAG_DEFAULT};
use windows::Win32::UI::WindowsAndMessaging::{
    SendMessageTimeoutW, HWND_BROADCAST, SMTO_ABORTIFHUNG, WM_FONTCHANGE,
};
use winreg::enums::{HKEY_LOCAL_MACHINE, KEY_SET_VALUE};
use winreg::RegKey;

use super::{Platform, PlatformOps};
use crate::constants::FONTS_REGISTRY_KEY;
use crate::error::InstallError;
use crate::font::FontFile;

const BROADCAST_TIMEOUT_MS: u32 = 1000;

pub struct WindowsOps;

impl PlatformOps for WindowsOps {
    fn platform(&self) -> Platform {
        Platform::Windows
    }

    fn fonts_dir(&self) -> Result<PathBuf, InstallError> {
        known_fonts_dir()
    }

    fn register(&self, font: &FontFile, installed: &Path) -> Result<(), InstallError> {
        let name = font.registry_value_name();
        let data = registry_data(installed);

        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        let key = hklm
            .open_subkey_with_flags(FONTS_REGISTRY_KEY, KEY_SET_VALUE)
            .map_err(|e| InstallError::Registry {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        key.set_value(&name, &data)
            .map_err(|e| InstallError::Registry {
                name: name.clone(),
                reason: e.to_string(),
            })?;
        log::debug!("Registered {} -> {}", name, data);

        let wide = to_wide(installed.as_os_str());
        let loaded = unsafe { AddFontResourceW(PCWSTR(wide.as_ptr())) };
        if loaded == 0 {
            return Err(InstallError::Registry {
                name,
                reason: "AddFontResourceW loaded no fonts".into(),
            });
        }
        Ok(())
    }

    fn notify(&self) -> Result<(), InstallError> {
        let result = unsafe {
            SendMessageTimeoutW(
                HWND_BROADCAST,
                WM_FONTCHANGE,
                WPARAM(0),
                LPARAM(0),
                SMTO_ABORTIFHUNG,
                BROADCAST_TIMEOUT_MS,
                None,
            )
        };
        if result.0 == 0 {
            return Err(InstallError::Notification(
                "WM_FONTCHANGE broadcast timed out or failed".into(),
            ));
        }
        Ok(())
    }
}

pub fn is_user_admin() -> bool {
    unsafe { IsUserAnAdmin() }.as_bool()
}

/// Resolves `FOLDERID_Fonts`, falling back to `%SystemRoot%\Fonts`.
pub(super) fn known_fonts_dir() -> Result<PathBuf, InstallError> {
    if let Some(dir) = known_folder_path() {
        return Ok(dir);
    }

    log::debug!("FOLDERID_Fonts unavailable, falling back to SystemRoot");
    std::env::var_os("SystemRoot")
        .map(|root| PathBuf::from(root).join("Fonts"))
        .ok_or_else(|| InstallError::UnsupportedPlatform("windows (no fonts folder)".into()))
}

fn known_folder_path() -> Option<PathBuf> {
    unsafe {
        let raw: PWSTR = SHGetKnownFolderPath(&FOLDERID_Fonts, KF_FLAG_DEFAULT, None).ok()?;
        let path = raw.to_string().ok();
        CoTaskMemFree(Some(raw.0 as _));
        path.filter(|p| !p.is_empty()).map(PathBuf::from)
    }
}

/// Fonts inside the system fonts folder are registered by file name; anything
/// else needs its full path.
fn registry_data(installed: &Path) -> String {
    let in_system_dir = match (installed.parent(), known_folder_path()) {
        (Some(parent), Some(fonts)) => parent == fonts,
        _ => false,
    };
    if in_system_dir {
        installed
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    } else {
        installed.to_string_lossy().into_owned()
    }
}

fn to_wide(s: &OsStr) -> Vec<u16> {
    s.encode_wide().chain(std::iter::once(0)).collect()
}
