//! Internal logging for the Nebula3D engine.
//!
//! One process-wide logger sits behind an `RwLock`; the engine writes to
//! it through the `engine_*!` macros and hosts may swap in their own
//! [`Logger`] with [`set_logger`]. The default sink prints timestamped,
//! severity-colored lines to the console, adding `file:line` when a
//! caller supplies it (the `engine_error!` macro always does).

use colored::*;
use std::sync::{OnceLock, RwLock};
use std::time::SystemTime;
use chrono::{DateTime, Local};

/// Global logger, lazily initialized to [`DefaultLogger`].
static LOGGER: OnceLock<RwLock<Box<dyn Logger>>> = OnceLock::new();

/// Sink for engine log entries.
///
/// Implementations decide what to do with each entry: print it, persist
/// it, forward it, or keep it for assertions. Must be `Send + Sync`
/// since entries arrive from the integrator and dispatcher threads too.
///
/// # Example
///
/// ```no_run
/// use nebula_3d_engine::nebula3d::log::{Logger, LogEntry};
///
/// struct FileLogger {
///     file: std::fs::File,
/// }
///
/// impl Logger for FileLogger {
///     fn log(&self, entry: &LogEntry) {
///         // Write to file...
///     }
/// }
/// ```
pub trait Logger: Send + Sync {
    /// Handle one entry. Called inline on the emitting thread.
    fn log(&self, entry: &LogEntry);
}

/// Everything known about one log message.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub severity: LogSeverity,

    /// When the message was emitted.
    pub timestamp: SystemTime,

    /// Emitting subsystem, e.g. `"nebula3d::Engine"`.
    pub source: String,

    pub message: String,

    /// Emitting source file; filled in by `engine_error!`, `None` otherwise.
    pub file: Option<&'static str>,

    /// Line within `file`.
    pub line: Option<u32>,
}

/// Severity of a [`LogEntry`], ordered `Trace < Debug < Info < Warn < Error`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogSeverity {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

/// Console sink used until a host installs its own [`Logger`].
///
/// Prints `[timestamp] [SEVERITY] [source] message`, appending
/// `(file:line)` when the entry carries a location.
pub struct DefaultLogger;

impl Logger for DefaultLogger {
    fn log(&self, entry: &LogEntry) {
        let datetime: DateTime<Local> = entry.timestamp.into();
        let timestamp = datetime.format("%Y-%m-%d %H:%M:%S%.3f").to_string();

        let severity_str = match entry.severity {
            LogSeverity::Trace => "TRACE".bright_black(),
            LogSeverity::Debug => "DEBUG".cyan(),
            LogSeverity::Info => "INFO ".green(),
            LogSeverity::Warn => "WARN ".yellow(),
            LogSeverity::Error => "ERROR".red().bold(),
        };

        let source = entry.source.bright_blue();

        if let (Some(file), Some(line)) = (entry.file, entry.line) {
            println!(
                "[{}] [{}] [{}] {} ({}:{})",
                timestamp,
                severity_str,
                source,
                entry.message,
                file,
                line
            );
        } else {
            println!(
                "[{}] [{}] [{}] {}",
                timestamp,
                severity_str,
                source,
                entry.message
            );
        }
    }
}

/// Replace the process-wide logger.
///
/// Every subsequent engine log goes to `logger`, from all threads.
pub fn set_logger<L: Logger + 'static>(logger: L) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(mut lock) = logger_lock.write() {
        *lock = Box::new(logger);
    }
}

/// Put [`DefaultLogger`] back as the process-wide logger.
pub fn reset_logger() {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(mut lock) = logger_lock.write() {
        *lock = Box::new(DefaultLogger);
    }
}

/// Route a plain message to the current logger. Macro plumbing for
/// `engine_trace!` through `engine_warn!`.
pub fn write(severity: LogSeverity, source: &str, message: String) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(lock) = logger_lock.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: None,
            line: None,
        });
    }
}

/// Route a message with its source location to the current logger.
/// Macro plumbing for `engine_error!`.
pub fn write_detailed(
    severity: LogSeverity,
    source: &str,
    message: String,
    file: &'static str,
    line: u32,
) {
    let logger_lock = LOGGER.get_or_init(|| RwLock::new(Box::new(DefaultLogger)));
    if let Ok(lock) = logger_lock.read() {
        lock.log(&LogEntry {
            severity,
            timestamp: SystemTime::now(),
            source: source.to_string(),
            message,
            file: Some(file),
            line: Some(line),
        });
    }
}

// ===== LOGGING MACROS =====

/// Log a TRACE message (very verbose, typically disabled)
#[macro_export]
macro_rules! engine_trace {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::write(
            $crate::log::LogSeverity::Trace,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a DEBUG message (development information)
#[macro_export]
macro_rules! engine_debug {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::write(
            $crate::log::LogSeverity::Debug,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an INFO message (important events)
#[macro_export]
macro_rules! engine_info {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::write(
            $crate::log::LogSeverity::Info,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log a WARN message (potential issues)
#[macro_export]
macro_rules! engine_warn {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::write(
            $crate::log::LogSeverity::Warn,
            $source,
            format!($($arg)*)
        )
    };
}

/// Log an ERROR message with file:line information
#[macro_export]
macro_rules! engine_error {
    ($source:expr, $($arg:tt)*) => {
        $crate::log::write_detailed(
            $crate::log::LogSeverity::Error,
            $source,
            format!($($arg)*),
            file!(),
            line!()
        )
    };
}

#[cfg(test)]
#[path = "log_tests.rs"]
mod tests;
