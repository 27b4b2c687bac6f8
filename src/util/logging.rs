// CalcIcon - util/logging.rs
//
// Structured logging for the icon generator.
//
// Progress (font chosen, each operator's position, save summary) goes to
// stderr through `tracing`. stdout is reserved for the single
// "Icon saved successfully to: <path>" line printed by main.rs, so the
// output path can be captured by build scripts.
//
// Level: RUST_LOG if set, else debug with --debug, else info.

use tracing_subscriber::EnvFilter;

/// Initialise the logging subsystem.
///
/// Priority: RUST_LOG env var > CLI --debug flag > default "info".
pub fn init(debug_flag: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if debug_flag {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new(super::constants::DEFAULT_LOG_LEVEL)
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .compact()
        .init();

    tracing::debug!(
        app = super::constants::APP_NAME,
        version = super::constants::APP_VERSION,
        "Logging initialised"
    );
}
