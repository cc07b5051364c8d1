/// File persistence for log output
///
/// Appends uncolored log lines to the log file under the application data
/// directory. File failures are silent: logging must never take down a
/// lookup.

use crate::paths;
use once_cell::sync::OnceCell;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::sync::Mutex;

static LOG_FILE: OnceCell<Mutex<Option<File>>> = OnceCell::new();

/// Open the log file for appending
///
/// Requires `paths::ensure_all_directories()` to have run.
pub fn init_file_logging() {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(paths::get_log_file_path())
        .ok();

    let _ = LOG_FILE.set(Mutex::new(file));
}

/// Append a line to the log file, if it is open
pub fn write_to_file(line: &str) {
    if let Some(lock) = LOG_FILE.get() {
        if let Ok(mut guard) = lock.lock() {
            if let Some(file) = guard.as_mut() {
                let _ = writeln!(file, "{}", line);
            }
        }
    }
}
