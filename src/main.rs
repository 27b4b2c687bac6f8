// CalcIcon - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Rendering the icon to assets/icon.png

use calcicon::{app, util};
use clap::Parser;

/// CalcIcon - generates the Simplistic Calculator app icon.
///
/// Renders the four arithmetic operators right-aligned on a light
/// background and writes a 1024x1024 PNG to assets/icon.png.
#[derive(Parser, Debug)]
#[command(name = "CalcIcon", version, about)]
struct Cli {
    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    util::logging::init(cli.debug);

    tracing::info!(
        version = util::constants::APP_VERSION,
        "CalcIcon starting"
    );

    match app::renderer::render_icon() {
        Ok(path) => {
            println!("Icon saved successfully to: {}", path.display());
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to generate icon");
            eprintln!("Error: {e}");
            let mut source = std::error::Error::source(&e);
            while let Some(cause) = source {
                eprintln!("  caused by: {cause}");
                source = cause.source();
            }
            std::process::exit(1);
        }
    }
}
