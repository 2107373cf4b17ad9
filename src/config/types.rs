//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::constants::STDIN_PATH;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages (DNS lookup failures)
    Warn,
    /// Adds the end-of-run summary
    Info,
    /// Adds per-domain lookup details
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// Controls how log messages are formatted:
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Command-line configuration.
///
/// # Examples
///
/// ```no_run
/// use mail_dns_check::Config;
/// use std::path::PathBuf;
///
/// let config = Config {
///     file: PathBuf::from("emails.txt"),
///     no_banner: true,
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Clone, Parser)]
#[command(
    name = "mail_dns_check",
    version,
    about = "Checks MX, SPF and DMARC records for the domain of each email address read from input"
)]
pub struct Config {
    /// File to read email addresses from, one per line (`-` reads stdin)
    #[arg(default_value = STDIN_PATH)]
    pub file: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn)]
    pub log_level: LogLevel,

    /// Log format
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Do not print the prompt and field header before the results
    #[arg(long)]
    pub no_banner: bool,
}

impl Config {
    /// Returns true when input should be read from stdin.
    pub fn reads_stdin(&self) -> bool {
        self.file.as_os_str() == STDIN_PATH
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            file: PathBuf::from(STDIN_PATH),
            log_level: LogLevel::Warn,
            log_format: LogFormat::Plain,
            no_banner: false,
        }
    }
}
