//! PiDigits-rs: concurrent hexadecimal digits of π.

use pidigits_cli::ui;
use pidigits_lib::{app, config, errors};

fn main() {
    let config = config::AppConfig::parse();

    // Initialize tracing on stderr; stdout carries only results
    let level = if config.verbose {
        tracing::Level::INFO
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into()),
        )
        .init();

    if let Err(err) = app::run(&config) {
        ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::exit_code(&err));
    }
}
