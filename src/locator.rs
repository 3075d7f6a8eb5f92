use std::fs;
use std::path::Path;

use crate::error::InstallError;
use crate::font::{is_font_file, FontFile};

/// Lists the font files directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. A directory holding only non-font
/// files is treated the same as an empty one.
pub fn locate_in_dir(dir: &Path) -> Result<Vec<FontFile>, InstallError> {
    if !dir.is_dir() {
        return Err(InstallError::MissingSourceDirectory(dir.to_path_buf()));
    }

    let entries = fs::read_dir(dir).map_err(|e| InstallError::from_io(dir, e))?;

    let mut fonts = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| InstallError::from_io(dir, e))?;
        let path = entry.path();
        if path.is_file() && is_font_file(&path) {
            fonts.push(FontFile::new(path));
        } else {
            log::debug!("Ignoring {}", path.display());
        }
    }

    if fonts.is_empty() {
        return Err(InstallError::NoFontFilesFound(dir.to_path_buf()));
    }

    fonts.sort_by(|a, b| a.path.file_name().cmp(&b.path.file_name()));
    log::debug!("Found {} font files in {}", fonts.len(), dir.display());
    Ok(fonts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScratchDir;

    #[test]
    fn test_filters_to_font_extensions() {
        let dir = ScratchDir::new("locate-filter");
        dir.write("b.OTF", b"b");
        dir.write("a.ttf", b"a");
        dir.write("readme.txt", b"x");
        dir.write("c.ttc", b"c");

        let fonts = locate_in_dir(dir.path()).unwrap();
        let names: Vec<_> = fonts
            .iter()
            .map(|f| f.file_name().unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec!["a.ttf", "b.OTF", "c.ttc"]);
    }

    #[test]
    fn test_non_font_files_only_is_same_as_empty() {
        let empty = ScratchDir::new("locate-empty");
        let junk = ScratchDir::new("locate-junk");
        junk.write("notes.txt", b"x");
        junk.write("manual.pdf", b"x");

        assert!(matches!(
            locate_in_dir(empty.path()),
            Err(InstallError::NoFontFilesFound(_))
        ));
        assert!(matches!(
            locate_in_dir(junk.path()),
            Err(InstallError::NoFontFilesFound(_))
        ));
    }

    #[test]
    fn test_missing_directory() {
        let dir = ScratchDir::new("locate-missing");
        let missing = dir.path().join("nope");
        assert!(matches!(
            locate_in_dir(&missing),
            Err(InstallError::MissingSourceDirectory(p)) if p == missing
        ));
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let dir = ScratchDir::new("locate-subdir");
        dir.write("nested.ttf/inner.ttf", b"x");
        dir.write("top.otf", b"x");

        let fonts = locate_in_dir(dir.path()).unwrap();
        assert_eq!(fonts.len(), 1);
        assert_eq!(fonts[0].display_name, "top");
    }
}
