use std::ffi::OsString;
use std::path::PathBuf;

use derive_more::Display;

use crate::{Error, Result};

pub const LOG_LEVEL_ENV: &str = "SEQHELPERS_LOG_LEVEL";
pub const LOG_FILE_ENV: &str = "SEQHELPERS_LOG_FILE";

const LOG_LEVEL_EXPECTED: &str = "one of trace|debug|info|warn|error|off";

/// Threshold for log lines; ordered from most to least verbose.
#[repr(u8)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
pub enum LogLevel {
    #[display("TRACE")]
    Trace = 0,
    #[display("DEBUG")]
    Debug = 1,
    #[display("INFO")]
    Info = 2,
    #[default]
    #[display("WARNING")]
    Warn = 3,
    #[display("ERROR")]
    Error = 4,
    #[display("OFF")]
    Off = 5,
}

impl LogLevel {
    const ALL: [Self; 6] = [
        Self::Trace,
        Self::Debug,
        Self::Info,
        Self::Warn,
        Self::Error,
        Self::Off,
    ];

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "trace" => Some(Self::Trace),
            "debug" => Some(Self::Debug),
            "info" => Some(Self::Info),
            "warn" | "warning" => Some(Self::Warn),
            "error" => Some(Self::Error),
            "off" | "none" => Some(Self::Off),
            _ => None,
        }
    }

    pub const fn raw(self) -> u8 {
        self as u8
    }

    pub fn from_raw(raw: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.raw() == raw)
    }
}

/// Logging settings resolved from the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LogConfig {
    pub level: LogLevel,
    pub file: Option<PathBuf>,
}

impl LogConfig {
    fn parse_file(file: Option<OsString>) -> Option<PathBuf> {
        file.filter(|value| !value.is_empty()).map(PathBuf::from)
    }

    /// Strict parse: an unrecognised level is an error.
    pub fn try_from_values(level: Option<&str>, file: Option<OsString>) -> Result<Self> {
        let level = match level {
            Some(raw) => LogLevel::parse(raw)
                .ok_or_else(|| Error::invalid_value(LOG_LEVEL_ENV, LOG_LEVEL_EXPECTED))?,
            None => LogLevel::default(),
        };
        Ok(Self {
            level,
            file: Self::parse_file(file),
        })
    }

    /// Lenient parse used at startup: bad values fall back to defaults.
    pub fn from_env() -> Self {
        let level = std::env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|raw| LogLevel::parse(&raw))
            .unwrap_or_default();
        Self {
            level,
            file: Self::parse_file(std::env::var_os(LOG_FILE_ENV)),
        }
    }
}
