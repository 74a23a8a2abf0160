//! Logger module
//!
//! Provides logging utilities for the test server including:
//! - Startup banner
//! - Error, warning and fatal lines with a local timestamp

pub mod writer;

use crate::config::{AppState, Config};
use chrono::Local;
use std::path::Path;

/// Initialize the logger with stdout/stderr targets
///
/// Should be called once at application startup.
pub fn init() -> std::io::Result<()> {
    writer::init(writer::LogWriter::standard())
}

/// Write to info log
fn write_info(message: &str) {
    if let Some(w) = writer::get() {
        w.write_info(message);
    } else {
        println!("{message}");
    }
}

/// Write to error log
fn write_error(message: &str) {
    let line = timestamped(message);
    if let Some(w) = writer::get() {
        w.write_error(&line);
    } else {
        eprintln!("{line}");
    }
}

fn timestamped(message: &str) -> String {
    format!("{} {message}", Local::now().format("%Y/%m/%d %H:%M:%S"))
}

/// Startup banner lines for the given configuration and root
pub fn banner_lines(config: &Config, root: &Path) -> Vec<String> {
    vec![
        "Liveflux JS Test Server".to_string(),
        "========================".to_string(),
        format!("Server running at: {}", config.base_url()),
        format!("Test runner: {}", config.runner_url()),
        format!("Serving files from: {}", root.display()),
        String::new(),
        "Press Ctrl+C to stop the server".to_string(),
    ]
}

pub fn log_server_start(state: &AppState) {
    for line in banner_lines(&state.config, &state.root) {
        write_info(&line);
    }
}

pub fn log_connection_error(err: &impl std::fmt::Display) {
    write_error(&format!("[ERROR] Failed to serve connection: {err}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}

/// Log an error that terminates the process
pub fn log_fatal(err: &impl std::fmt::Display) {
    write_error(&format!("[FATAL] {err}"));
}
