//! Bundles the fonts found in `fonts/` (or `$FONT_INSTALLER_EMBED_DIR`) into the
//! binary as a static `BUNDLED` table.

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

const EMBED_DIR_VAR: &str = "FONT_INSTALLER_EMBED_DIR";
const FONT_EXTENSIONS: [&str; 3] = ["ttf", "otf", "ttc"];

fn main() {
    println!("cargo:rerun-if-env-changed={EMBED_DIR_VAR}");

    let manifest_dir = PathBuf::from(env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR"));
    let embed_dir = env::var_os(EMBED_DIR_VAR)
        .map(PathBuf::from)
        .unwrap_or_else(|| manifest_dir.join("fonts"));
    println!("cargo:rerun-if-changed={}", embed_dir.display());

    let fonts = collect_fonts(&embed_dir);

    let mut table = String::from("pub static BUNDLED: &[EmbeddedFont] = &[\n");
    for path in &fonts {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let _ = writeln!(
            table,
            "    EmbeddedFont {{ name: {:?}, data: include_bytes!({:?}) }},",
            name,
            path.display().to_string()
        );
    }
    table.push_str("];\n");

    let out = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR")).join("embedded_fonts.rs");
    fs::write(&out, table).expect("Failed to write embedded font table");
}

fn collect_fonts(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut fonts: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && is_font_file(path))
        .collect();
    fonts.sort();

    for path in &fonts {
        println!("cargo:rerun-if-changed={}", path.display());
    }
    fonts
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.iter().any(|k| ext.eq_ignore_ascii_case(k)))
        .unwrap_or(false)
}
