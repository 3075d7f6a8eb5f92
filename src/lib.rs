pub mod cli;
pub mod config;
pub mod constants;
pub mod embedded;
pub mod error;
pub mod font;
pub mod installer;
pub mod locator;
pub mod platform;
pub mod privilege;
pub mod request;

#[cfg(test)]
mod test_support;

use log::{debug, info};

use crate::config::Config;
use crate::embedded::EmbeddedFont;
use crate::error::InstallError;
use crate::installer::InstallReport;
use crate::platform::PlatformOps;
use crate::request::{InstallRequest, ResolvedDestination, Source};

/// Runs one installation against the host platform and the fonts bundled in
/// this binary.
pub fn run(request: &InstallRequest, config: &Config) -> Result<InstallReport, InstallError> {
    let ops = platform::native()?;
    run_with(
        request,
        config,
        ops.as_ref(),
        embedded::BUNDLED,
        privilege::is_elevated(),
    )
}

pub fn run_with(
    request: &InstallRequest,
    config: &Config,
    ops: &dyn PlatformOps,
    bundled: &[EmbeddedFont],
    elevated: bool,
) -> Result<InstallReport, InstallError> {
    let target = request.destination.resolve(config, ops)?;
    check_privileges(&target, config, elevated)?;

    info!(
        "Installing {} into {} ({})",
        request.source,
        target.path.display(),
        ops.platform()
    );

    match &request.source {
        Source::Directory(dir) => installer::install_from_dir(dir, &target.path, ops),
        Source::Embedded => installer::install_embedded(bundled, &target.path, ops),
    }
}

fn check_privileges(
    target: &ResolvedDestination,
    config: &Config,
    elevated: bool,
) -> Result<(), InstallError> {
    if elevated {
        return Ok(());
    }
    if target.system && config.install.require_elevation {
        return Err(InstallError::NotElevated(target.path.clone()));
    }
    debug!("Not elevated, continuing with {}", target.path.display());
    Ok(())
}
