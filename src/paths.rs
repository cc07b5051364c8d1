//! Centralized path resolution for TokenTrack
//!
//! All file and directory paths are resolved through this module so the CLI
//! behaves the same regardless of the working directory it is launched from.
//!
//! ## Path Strategy
//!
//! Platform-standard application data locations:
//! - **macOS**: `~/Library/Application Support/TokenTrack/`
//! - **Windows**: `%LOCALAPPDATA%\TokenTrack\`
//! - **Linux**: `$XDG_DATA_HOME/TokenTrack/` (fallback `~/.local/share/TokenTrack/`)
//!
//! ## Directory Structure
//!
//! ```text
//! TokenTrack/
//! ├── data/
//! │   └── api_keys.json
//! └── logs/
//!     └── tokentrack.log
//! ```

use once_cell::sync::Lazy;
use std::path::PathBuf;

// =============================================================================
// BASE DIRECTORY RESOLUTION
// =============================================================================

/// Lazy-initialized base directory (thread-safe)
static BASE_DIRECTORY: Lazy<PathBuf> = Lazy::new(resolve_base_directory);

/// Resolves the base directory for all TokenTrack data
fn resolve_base_directory() -> PathBuf {
    const APP_DIR: &str = "TokenTrack";

    if let Some(dir) = dirs::data_local_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(dir) = dirs::data_dir() {
        return dir.join(APP_DIR);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(APP_DIR);
    }

    PathBuf::from(APP_DIR)
}

// =============================================================================
// DIRECTORY AND FILE ACCESSORS
// =============================================================================

/// Returns the base directory for all TokenTrack data
pub fn get_base_directory() -> PathBuf {
    BASE_DIRECTORY.clone()
}

/// Returns the data directory path (key store lives here)
pub fn get_data_directory() -> PathBuf {
    BASE_DIRECTORY.join("data")
}

/// Returns the logs directory path
pub fn get_logs_directory() -> PathBuf {
    BASE_DIRECTORY.join("logs")
}

/// Returns the API key store path
///
/// A single JSON object holding the optional explorer / enhanced-provider /
/// price-provider keys. Stored in plaintext; the file is only as protected
/// as the user account that owns it.
pub fn get_api_keys_path() -> PathBuf {
    get_data_directory().join("api_keys.json")
}

/// Returns the log file path
pub fn get_log_file_path() -> PathBuf {
    get_logs_directory().join("tokentrack.log")
}

/// Create every directory the application writes into
///
/// Must run before logger initialization (the logger opens its file on the
/// first write).
pub fn ensure_all_directories() -> Result<(), String> {
    for dir in [get_data_directory(), get_logs_directory()] {
        std::fs::create_dir_all(&dir)
            .map_err(|e| format!("Failed to create directory '{}': {}", dir.display(), e))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_store_lives_under_data_dir() {
        let keys = get_api_keys_path();
        assert!(keys.starts_with(get_data_directory()));
        assert_eq!(keys.file_name().unwrap(), "api_keys.json");
    }
}
