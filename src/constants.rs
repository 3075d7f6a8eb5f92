/// Extensions recognized as installable fonts, compared case-insensitively.
pub const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

pub const TRUETYPE_SUFFIX: &str = " (TrueType)";

#[cfg(target_os = "windows")]
pub const FONTS_REGISTRY_KEY: &str = r"SOFTWARE\Microsoft\Windows NT\CurrentVersion\Fonts";

pub const MACOS_FONTS_DIR: &str = "/Library/Fonts/";
pub const LINUX_FONTS_DIR: &str = "/usr/share/fonts/";

#[cfg(target_os = "linux")]
pub const FONT_CACHE_TOOL: &str = "fc-cache";

pub const EXTRACTION_DIR_PREFIX: &str = "font-installer-";

pub const CONFIG_DIR_NAME: &str = "font-installer";
pub const CONFIG_FILE_NAME: &str = "config.toml";
