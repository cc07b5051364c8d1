/// Core logging implementation with automatic filtering
///
/// Filtering rules:
/// 1. Errors are always shown
/// 2. Messages above the minimum level threshold are dropped
/// 3. Debug level requires --debug-<module> for that tag
/// 4. Verbose level requires --verbose

use super::config::{get_logger_config, is_debug_enabled_for_tag};
use super::levels::LogLevel;
use super::tags::LogTag;

/// Check if a log message should be displayed
pub fn should_log(tag: &LogTag, level: LogLevel) -> bool {
    let config = get_logger_config();

    // Rule 1: errors always log
    if level == LogLevel::Error {
        return true;
    }

    // Rule 3: debug requires debug mode for that specific tag
    if level == LogLevel::Debug {
        return is_debug_enabled_for_tag(tag);
    }

    // Rules 2 and 4: level threshold (--verbose raises the threshold)
    level <= config.min_level
}

/// Internal logging function with automatic filtering
pub fn log_internal(tag: LogTag, level: LogLevel, message: &str) {
    if !should_log(&tag, level) {
        return;
    }

    super::format::format_and_log(tag, level.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_always_log() {
        assert!(should_log(&LogTag::Api, LogLevel::Error));
    }

    #[test]
    fn test_debug_gated_without_flag() {
        // No --debug-api flag in the test harness argv
        assert!(!should_log(&LogTag::Api, LogLevel::Debug));
    }

    #[test]
    fn test_info_logs_at_default_threshold() {
        assert!(should_log(&LogTag::System, LogLevel::Info));
    }
}
