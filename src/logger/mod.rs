//! Structured logging for TokenTrack
//!
//! Provides a small, ergonomic logging API with:
//! - Standard log levels (Error/Warning/Info/Debug/Verbose)
//! - Per-module debug control via `--debug-<module>` flags
//! - Dual output: colored console + file persistence
//!
//! ## Usage
//!
//! ```rust
//! use tokentrack::logger::{self, LogTag};
//!
//! logger::error(LogTag::Api, "Request failed");
//! logger::info(LogTag::Wallet, "Lookup complete");
//! logger::debug(LogTag::Api, "GET /api?module=token"); // Only if --debug-api
//! ```
//!
//! ## Initialization
//!
//! Call once at startup, after `paths::ensure_all_directories()`:
//! ```rust
//! tokentrack::logger::init();
//! ```

mod config;
mod core;
mod file;
mod format;
mod levels;
mod tags;

pub use config::{get_logger_config, init_from_args, LoggerConfig};
pub use levels::LogLevel;
pub use tags::LogTag;

/// Initialize the logger system
///
/// Parses command-line arguments for `--debug-<module>`, `--verbose` and
/// `--quiet`, then prepares file logging. Call once before any logging.
pub fn init() {
    config::init_from_args();
    file::init_file_logging();
}

/// Log at ERROR level (always shown, critical issues)
pub fn error(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Error, message);
}

/// Log at WARNING level (important issues, shown unless --quiet)
pub fn warning(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Warning, message);
}

/// Log at INFO level (standard operations)
pub fn info(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Info, message);
}

/// Log at DEBUG level (only shown with --debug-<module> for the tag)
pub fn debug(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Debug, message);
}

/// Log at VERBOSE level (only shown with --verbose)
pub fn verbose(tag: LogTag, message: &str) {
    core::log_internal(tag, LogLevel::Verbose, message);
}
