//! Log formatting and output with ANSI colors
//!
//! Handles:
//! - Colorized console output with aligned tag and level columns
//! - Dual output (console + file)
//! - Broken pipe handling for piped invocations

use super::file::write_to_file;
use super::tags::LogTag;
use chrono::Local;
use colored::*;
use std::io::{stdout, ErrorKind, Write};

/// Tag column width for alignment
const TAG_WIDTH: usize = 8;

/// Level column width for alignment
const LEVEL_WIDTH: usize = 7;

/// Format and output a log message
pub fn format_and_log(tag: LogTag, log_type: &str, message: &str) {
    let now = Local::now();
    let time = now.format("%H:%M:%S").to_string();

    let console_line = format!(
        "{} [{}] [{}] {}",
        time.dimmed(),
        format_tag(&tag),
        format_log_type(log_type),
        message
    );
    print_stdout_safe(&console_line);

    let file_line = format!(
        "{} [{}] [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S"),
        tag.to_plain_string(),
        log_type,
        message
    );
    write_to_file(&file_line);
}

/// Format a tag with its subsystem color
fn format_tag(tag: &LogTag) -> ColoredString {
    let padded = format!("{:<width$}", tag.to_plain_string(), width = TAG_WIDTH);
    match tag {
        LogTag::System => padded.bright_yellow().bold(),
        LogTag::Api => padded.bright_purple().bold(),
        LogTag::Wallet => padded.bright_magenta().bold(),
        LogTag::Token => padded.bright_cyan().bold(),
        LogTag::Config => padded.bright_blue().bold(),
        LogTag::Display => padded.bright_white().bold(),
    }
}

/// Format a log level with its severity color
fn format_log_type(log_type: &str) -> ColoredString {
    let padded = format!("{:<width$}", log_type, width = LEVEL_WIDTH);
    match log_type {
        "ERROR" => padded.bright_red().bold(),
        "WARNING" => padded.bright_yellow(),
        "INFO" => padded.bright_green(),
        "DEBUG" => padded.bright_blue(),
        "VERBOSE" => padded.dimmed(),
        _ => padded.normal(),
    }
}

/// Print to stdout, swallowing broken-pipe errors (e.g. `tokentrack ... | head`)
fn print_stdout_safe(line: &str) {
    let mut out = stdout();
    if let Err(e) = writeln!(out, "{}", line) {
        if e.kind() == ErrorKind::BrokenPipe {
            std::process::exit(0);
        }
    }
}
