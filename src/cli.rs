use std::path::PathBuf;

use clap::Parser;

use crate::request::{Destination, InstallRequest, Source};

#[derive(Parser, Debug)]
#[command(name = "font-installer")]
#[command(version)]
#[command(about = "Install fonts into the system fonts directory", long_about = None)]
#[command(after_help = "\
USAGE PATTERNS:
    font-installer                        Install bundled fonts into the system fonts directory
    font-installer --embedded <DEST>      Install bundled fonts into DEST
    font-installer <SOURCE>               Install fonts from SOURCE into the system fonts directory
    font-installer <SOURCE> <DEST>        Install fonts from SOURCE into DEST

Only .ttf, .otf and .ttc files are installed. Files already present in the
destination are left untouched. Installing into the system fonts directory
requires administrator (Windows) or root (macOS, Linux) privileges.")]
pub struct Cli {
    /// Install the fonts bundled in this binary into DEST
    #[arg(long, value_name = "DEST", conflicts_with_all = ["source", "dest", "user"])]
    pub embedded: Option<PathBuf>,

    /// Install into the current user's fonts directory
    #[arg(long, conflicts_with = "dest")]
    pub user: bool,

    /// List the fonts bundled in this binary and exit
    #[arg(long, conflicts_with_all = ["embedded", "source", "dest", "user"])]
    pub list_embedded: bool,

    /// Directory containing the fonts to install
    pub source: Option<PathBuf>,

    /// Destination directory (defaults to the system fonts directory)
    pub dest: Option<PathBuf>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    ListEmbedded,
    Install(InstallRequest),
}

impl Cli {
    pub fn action(&self) -> CliAction {
        if self.list_embedded {
            return CliAction::ListEmbedded;
        }

        let destination = match (&self.embedded, &self.dest) {
            (Some(dest), _) | (None, Some(dest)) => Destination::Path(dest.clone()),
            (None, None) if self.user => Destination::User,
            (None, None) => Destination::System,
        };

        let source = match &self.source {
            Some(dir) => Source::Directory(dir.clone()),
            None => Source::Embedded,
        };

        CliAction::Install(InstallRequest {
            source,
            destination,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(args: &[&str]) -> InstallRequest {
        match Cli::parse_from(args).action() {
            CliAction::Install(request) => request,
            other => panic!("expected an install, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_no_args() {
        let request = request(&["font-installer"]);
        assert_eq!(request.source, Source::Embedded);
        assert_eq!(request.destination, Destination::System);
    }

    #[test]
    fn test_parse_embedded_with_dest() {
        let request = request(&["font-installer", "--embedded", "/tmp/out"]);
        assert_eq!(request.source, Source::Embedded);
        assert_eq!(
            request.destination,
            Destination::Path(PathBuf::from("/tmp/out"))
        );
    }

    #[test]
    fn test_parse_source_only() {
        let request = request(&["font-installer", "./fonts"]);
        assert_eq!(request.source, Source::Directory(PathBuf::from("./fonts")));
        assert_eq!(request.destination, Destination::System);
    }

    #[test]
    fn test_parse_source_and_dest() {
        let request = request(&["font-installer", "./fonts", "/srv/fonts"]);
        assert_eq!(request.source, Source::Directory(PathBuf::from("./fonts")));
        assert_eq!(
            request.destination,
            Destination::Path(PathBuf::from("/srv/fonts"))
        );
    }

    #[test]
    fn test_parse_user() {
        let request = request(&["font-installer", "--user", "./fonts"]);
        assert_eq!(request.source, Source::Directory(PathBuf::from("./fonts")));
        assert_eq!(request.destination, Destination::User);
    }

    #[test]
    fn test_parse_list_embedded() {
        let cli = Cli::parse_from(["font-installer", "--list-embedded"]);
        assert_eq!(cli.action(), CliAction::ListEmbedded);
    }

    #[test]
    fn test_embedded_conflicts_with_source() {
        let result = Cli::try_parse_from(["font-installer", "--embedded", "/tmp/out", "./fonts"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_user_conflicts_with_dest() {
        let result = Cli::try_parse_from(["font-installer", "--user", "./fonts", "/tmp/out"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_embedded_requires_dest() {
        let result = Cli::try_parse_from(["font-installer", "--embedded"]);
        assert!(result.is_err());
    }
}
