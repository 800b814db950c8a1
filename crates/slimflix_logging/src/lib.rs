#![deny(missing_docs)]
//! Shared logging utilities for the SlimFlix workspace.
//!
//! This crate provides the `ui_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger.
//!
//! Every macro accepts an optional `widget = "<name>";` prefix which becomes
//! the log target (`slimflix::<name>`), so output from one widget can be
//! filtered without touching the others.

/// Prefix for widget-scoped log targets.
pub const TARGET_PREFIX: &str = "slimflix";

/// Builds the log target for a widget name, e.g. `slimflix::search`.
pub fn widget_target(widget: &str) -> String {
    format!("{TARGET_PREFIX}::{widget}")
}

#[doc(hidden)]
#[macro_export]
macro_rules! __ui_log {
    ($level:expr, widget = $widget:expr; $($arg:tt)*) => {{
        let target = $crate::widget_target($widget);
        log::log!(target: target.as_str(), $level, $($arg)*);
    }};
    ($level:expr, $($arg:tt)*) => {{
        log::log!($level, $($arg)*);
    }};
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! ui_trace {
    ($($arg:tt)*) => {
        $crate::__ui_log!(log::Level::Trace, $($arg)*)
    };
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! ui_info {
    ($($arg:tt)*) => {
        $crate::__ui_log!(log::Level::Info, $($arg)*)
    };
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! ui_debug {
    ($($arg:tt)*) => {
        $crate::__ui_log!(log::Level::Debug, $($arg)*)
    };
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! ui_warn {
    ($($arg:tt)*) => {
        $crate::__ui_log!(log::Level::Warn, $($arg)*)
    };
}

/// Logs an error-level message using the global logging facade.
///
/// Transport and decoding failures end up here. It is the developer-facing
/// sink, the user only ever sees the widget's degraded state.
#[macro_export]
macro_rules! ui_error {
    ($($arg:tt)*) => {
        $crate::__ui_log!(log::Level::Error, $($arg)*)
    };
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}
