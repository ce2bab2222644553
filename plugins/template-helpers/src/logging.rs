use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::{LazyLock, Mutex};

use crate::config::{LogConfig, LogLevel};

const LOG_SOURCE_NAME: &str = "seqhelpers";

static ENV_CONFIG: LazyLock<LogConfig> = LazyLock::new(LogConfig::from_env);
static LOG_LEVEL: LazyLock<AtomicU8> = LazyLock::new(|| AtomicU8::new(ENV_CONFIG.level.raw()));
static LOG_SINK: LazyLock<Mutex<LogSink>> =
    LazyLock::new(|| Mutex::new(LogSink::new(ENV_CONFIG.file.clone())));

/// Target path plus the lazily opened handle.
#[derive(Debug)]
struct LogSink {
    path: Option<PathBuf>,
    file: Option<File>,
}

impl LogSink {
    const fn new(path: Option<PathBuf>) -> Self {
        Self { path, file: None }
    }

    fn append(&mut self, line: &str) {
        let Some(path) = self.path.as_ref() else {
            return;
        };

        if self.file.is_none() {
            match OpenOptions::new().create(true).append(true).open(path) {
                Ok(file) => self.file = Some(file),
                Err(_) => return,
            }
        }

        // Reopened on the next call.
        if let Some(file) = self.file.as_mut()
            && writeln!(file, "{line}").is_err()
        {
            self.file = None;
        }
    }
}

/// Replaces the settings read from the environment.
pub fn init(config: LogConfig) {
    set_log_level(config.level);
    if let Ok(mut sink) = LOG_SINK.lock() {
        *sink = LogSink::new(config.file);
    }
}

pub fn set_log_level(level: LogLevel) {
    LOG_LEVEL.store(level.raw(), Ordering::Relaxed);
}

pub fn log_level() -> LogLevel {
    LogLevel::from_raw(LOG_LEVEL.load(Ordering::Relaxed)).unwrap_or_default()
}

fn passes(threshold: LogLevel, level: LogLevel) -> bool {
    level != LogLevel::Off && level >= threshold
}

fn format_line(level: LogLevel, message: &str) -> String {
    format!("[{LOG_SOURCE_NAME}][{level}] {message}")
}

fn append_log_line(line: &str) {
    if let Ok(mut sink) = LOG_SINK.lock() {
        sink.append(line);
    }
}

/// Writes `message` when `level` clears the current threshold.
pub fn log(level: LogLevel, message: &str) {
    log_with(level, || message.to_string());
}

/// Like [`log`], but only builds the message when it will be written.
pub fn log_with<F>(level: LogLevel, message: F)
where
    F: FnOnce() -> String,
{
    if !passes(log_level(), level) {
        return;
    }
    append_log_line(&format_line(level, &message()));
}

pub fn warn(message: &str) {
    log(LogLevel::Warn, message);
}
