#![deny(missing_docs)]
//! Shared logging utilities for the dat reader workspace.
//!
//! Library crates log through the `dat_*` macros so the call sites stay
//! independent of the backend; binaries pick the backend at startup.

/// Target used by every `dat_*` macro, so a logger can filter the parser
/// diagnostics separately from dependency noise.
pub const LOG_TARGET: &str = "dat";

/// Logs a trace-level message under the [`LOG_TARGET`] target.
#[macro_export]
macro_rules! dat_trace {
    ($($arg:tt)*) => {{
        log::trace!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a debug-level message under the [`LOG_TARGET`] target.
#[macro_export]
macro_rules! dat_debug {
    ($($arg:tt)*) => {{
        log::debug!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an info-level message under the [`LOG_TARGET`] target.
#[macro_export]
macro_rules! dat_info {
    ($($arg:tt)*) => {{
        log::info!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs a warn-level message under the [`LOG_TARGET`] target.
#[macro_export]
macro_rules! dat_warn {
    ($($arg:tt)*) => {{
        log::warn!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Logs an error-level message under the [`LOG_TARGET`] target.
#[macro_export]
macro_rules! dat_error {
    ($($arg:tt)*) => {{
        log::error!(target: $crate::LOG_TARGET, $($arg)*);
    }};
}

/// Initializes a terminal logger for use in tests.
///
/// Safe to call from many tests: a second initialization is a no-op.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may already own the global logger.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    );
}
