/// Logger configuration initialized from command-line arguments
///
/// Scans argv once at startup for:
/// - `--debug-<module>` - enable DEBUG output for one tag
/// - `--debug-all`      - enable DEBUG output for every tag
/// - `--verbose`        - enable VERBOSE output globally
/// - `--quiet`          - suppress everything below WARNING

use super::levels::LogLevel;
use super::tags::LogTag;
use once_cell::sync::OnceCell;
use std::collections::HashSet;
use std::sync::RwLock;

#[derive(Debug, Clone)]
pub struct LoggerConfig {
    pub min_level: LogLevel,
    pub debug_tags: HashSet<String>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            min_level: LogLevel::Info,
            debug_tags: HashSet::new(),
        }
    }
}

static LOGGER_CONFIG: OnceCell<RwLock<LoggerConfig>> = OnceCell::new();

/// Parse command-line arguments and initialize the global logger config
///
/// Safe to call more than once; later calls are ignored.
pub fn init_from_args() {
    let args: Vec<String> = std::env::args().collect();

    let mut config = LoggerConfig::default();

    if args.iter().any(|a| a == "--quiet") {
        config.min_level = LogLevel::Warning;
    }

    if args.iter().any(|a| a == "--verbose") {
        config.min_level = LogLevel::Verbose;
    }

    for tag in LogTag::all() {
        let flag = format!("--debug-{}", tag.to_debug_key());
        if args.iter().any(|a| *a == flag) {
            config.debug_tags.insert(tag.to_debug_key().to_string());
        }
    }

    if args.iter().any(|a| a == "--debug-all") {
        for tag in LogTag::all() {
            config.debug_tags.insert(tag.to_debug_key().to_string());
        }
    }

    let _ = LOGGER_CONFIG.set(RwLock::new(config));
}

/// Get a copy of the current logger configuration
///
/// Falls back to defaults when called before init (e.g. from tests).
pub fn get_logger_config() -> LoggerConfig {
    match LOGGER_CONFIG.get() {
        Some(lock) => lock.read().map(|c| c.clone()).unwrap_or_default(),
        None => LoggerConfig::default(),
    }
}

/// Whether DEBUG output is enabled for a tag
pub fn is_debug_enabled_for_tag(tag: &LogTag) -> bool {
    get_logger_config().debug_tags.contains(tag.to_debug_key())
}
