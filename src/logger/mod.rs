//! Logger module
//!
//! Provides logging utilities for the mock backend including:
//! - Startup banner
//! - Per-request path diagnostics
//! - Access logging with multiple formats
//! - Error and warning logging

mod format;
pub mod writer;

pub use format::AccessLogEntry;

use crate::config::{Config, LogLevel};
use crate::data::MockData;
use std::net::SocketAddr;

/// Initialize the logger with configuration
///
/// Should be called once at application startup.
pub fn init(config: &Config, level: LogLevel) -> std::io::Result<()> {
    writer::init(
        level,
        config.logging.access_log_file.as_deref(),
        config.logging.error_log_file.as_deref(),
    )
}

fn enabled(level: LogLevel) -> bool {
    writer::get().map_or(true, |w| w.enabled(level))
}

#[cfg(test)]
thread_local! {
    static CAPTURED: std::cell::RefCell<Vec<String>> = const { std::cell::RefCell::new(Vec::new()) };
}

/// Lines written on this thread since the last call
#[cfg(test)]
pub fn take_captured() -> Vec<String> {
    CAPTURED.with(|c| std::mem::take(&mut *c.borrow_mut()))
}

/// Write to info/access log, regardless of level
fn write_info(message: &str) {
    #[cfg(test)]
    CAPTURED.with(|c| c.borrow_mut().push(message.to_string()));
    match writer::get() {
        Some(w) => w.write_info(message),
        None => println!("{message}"),
    }
}

/// Write to error log, regardless of level
fn write_error(message: &str) {
    #[cfg(test)]
    CAPTURED.with(|c| c.borrow_mut().push(message.to_string()));
    match writer::get() {
        Some(w) => w.write_error(message),
        None => eprintln!("{message}"),
    }
}

pub fn log_server_start(addr: &SocketAddr, config: &Config, data: &MockData) {
    write_info(&format!("Serving at port {}", addr.port()));
    write_info("You can now run your Flutter app.");
    if enabled(LogLevel::Info) {
        write_info(&format!("Listening on: http://{addr}"));
        write_info(&format!("Log level: {}", config.logging.level));
        write_info(&format!(
            "Loaded {} patient record(s), {} donor record(s)",
            data.patient_count(),
            data.donor_count()
        ));
        if let Some(ref path) = config.logging.access_log_file {
            write_info(&format!("Access log: {path}"));
        }
        if let Some(ref path) = config.logging.error_log_file {
            write_info(&format!("Error log: {path}"));
        }
    }
}

/// Text of the diagnostic line every request produces
pub fn request_path_line(target: &str) -> String {
    format!("Request received for path: {target}")
}

/// `target` is the request target as sent, query string included
pub fn log_request_path(target: &str) {
    log_warning(&request_path_line(target));
}

pub fn log_connection_accepted(peer_addr: &SocketAddr) {
    if enabled(LogLevel::Debug) {
        write_info(&format!("[Connection] Accepted from: {peer_addr}"));
    }
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    log_error(&format!("Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    if enabled(LogLevel::Error) {
        write_error(&format!("[ERROR] {message}"));
    }
}

pub fn log_warning(message: &str) {
    if enabled(LogLevel::Warn) {
        write_error(&format!("[WARN] {message}"));
    }
}

/// Log formatted access log entry
pub fn log_access(entry: &AccessLogEntry, format: &str) {
    let line = entry.format(format);
    match writer::get() {
        Some(w) => w.write_access(&line),
        None => println!("{line}"),
    }
}
