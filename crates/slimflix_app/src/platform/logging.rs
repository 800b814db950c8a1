//! Logger setup for the console front end.
//!
//! Only records under the `slimflix` target prefix are kept, so the HTTP
//! stack's own chatter stays out of `slimflix.log`.

use std::fs::File;
use std::path::Path;
use std::str::FromStr;

use log::LevelFilter;
use serde::{Deserialize, Serialize};
use simplelog::{
    ColorChoice, CombinedLogger, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};
use slimflix_logging::TARGET_PREFIX;

pub const LOG_FILENAME: &str = "slimflix.log";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LogDestination {
    #[default]
    File,
    /// Stderr only. Output interleaves with the console page dumps.
    Terminal,
    /// Warnings and errors on stderr, everything at `level` in the file.
    Both,
}

/// Parses a level name from the configuration, falling back to `Info`.
pub fn parse_level(raw: &str) -> LevelFilter {
    LevelFilter::from_str(raw.trim()).unwrap_or(LevelFilter::Info)
}

pub fn initialize(destination: LogDestination, level: LevelFilter, dir: &Path) {
    let loggers = build_loggers(destination, level, dir);
    if loggers.is_empty() {
        return;
    }
    let _ = CombinedLogger::init(loggers);
}

fn build_loggers(
    destination: LogDestination,
    level: LevelFilter,
    dir: &Path,
) -> Vec<Box<dyn SharedLogger>> {
    let config = widget_config();
    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    match destination {
        LogDestination::Terminal => {
            loggers.push(TermLogger::new(level, config, TerminalMode::Stderr, ColorChoice::Auto));
        }
        LogDestination::File => loggers.extend(file_logger(level, config, dir)),
        LogDestination::Both => {
            loggers.push(TermLogger::new(
                LevelFilter::Warn,
                config.clone(),
                TerminalMode::Stderr,
                ColorChoice::Auto,
            ));
            loggers.extend(file_logger(level, config, dir));
        }
    }
    loggers
}

fn widget_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .add_filter_allow_str(TARGET_PREFIX)
        .build()
}

fn file_logger(level: LevelFilter, config: Config, dir: &Path) -> Option<Box<dyn SharedLogger>> {
    let path = dir.join(LOG_FILENAME);
    match File::create(&path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: could not create log file {path:?}: {err}");
            None
        }
    }
}
