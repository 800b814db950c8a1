mod app;
mod config;
mod console;
mod effects;
mod logging;
mod ui;

use anyhow::Context;
use slimflix_logging::{ui_info, ui_warn};

/// Loads configuration from the working directory, starts logging and runs
/// the page until the console asks to quit.
pub fn run() -> anyhow::Result<()> {
    let dir = std::env::current_dir().context("resolve working directory")?;
    let loaded = config::load_config(&dir);
    let config = loaded.as_ref().cloned().unwrap_or_default();

    logging::initialize(
        config.log_destination,
        logging::parse_level(&config.log_level),
        &dir,
    );
    match loaded {
        Ok(_) => ui_info!("Configuration loaded from {:?}", dir),
        Err(err) => ui_warn!("{}; falling back to defaults", err),
    }
    if let Err(err) = config::write_default_if_missing(&dir) {
        ui_warn!("Could not write a default configuration: {}", err);
    }

    app::run_app(config)
}
