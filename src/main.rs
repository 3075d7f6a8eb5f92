use clap::Parser;
use font_installer::cli::{Cli, CliAction};
use font_installer::config::Config;
use font_installer::embedded::BUNDLED;
use font_installer::installer::InstallReport;
use font_installer::run;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.action() {
        CliAction::ListEmbedded => {
            if BUNDLED.is_empty() {
                println!("No fonts are bundled in this installer.");
            }
            for font in BUNDLED {
                println!("{} ({} bytes)", font.name, font.data.len());
            }
        }
        CliAction::Install(request) => {
            let config = Config::load();
            println!("Installing {}...", request.source);

            match run(&request, &config) {
                Ok(report) => print_report(&report),
                Err(e) => {
                    eprintln!("Font installation failed: {}", e);
                    std::process::exit(1);
                }
            }
        }
    }
}

fn print_report(report: &InstallReport) {
    for path in &report.installed {
        println!("  installed  {}", path.display());
    }
    for path in &report.skipped {
        println!("  skipped    {} (already present)", path.display());
    }

    println!(
        "Done: {} installed, {} already present.",
        report.installed.len(),
        report.skipped.len()
    );

    if report.registration_failures > 0 {
        println!(
            "Warning: {} of {} fonts could not be registered with the system.",
            report.registration_failures,
            report.total()
        );
    }
    if !report.notified {
        println!("Note: the system was not notified; fonts may appear after you log in again.");
    }
}
