//! Logger initialization.
//!
//! This module provides functions to initialize the logger with custom formatting.
//! Logs go to stderr so that stdout carries only result lines.

use std::io::Write;

use crate::config::{LogFormat, LOG_TARGET};
use crate::error_handling::InitializationError;
use colored::*;
use log::LevelFilter;

/// Initializes the logger with the specified level and format.
///
/// Configures `env_logger` with custom formatting. Supports both plain text
/// (with colors) and JSON formats for structured logging.
///
/// The logger reads from the `RUST_LOG` environment variable first. The provided
/// `level` then overrides the default level and this crate's level, and hickory's
/// targets are capped at `error`, so `RUST_LOG` only tunes other targets.
///
/// # Errors
///
/// Returns `InitializationError::LoggerError` if a logger is already installed.
///
/// # Examples
///
/// ```bash
/// # Show per-domain lookup details
/// mail_dns_check --log-level debug < emails.txt
///
/// # JSON lines on stderr, results on stdout
/// mail_dns_check --log-format json emails.txt 2> lookups.jsonl
/// ```
pub fn init_logger_with(level: LevelFilter, format: LogFormat) -> Result<(), InitializationError> {
    // try_init() so repeated initialization in tests is an error, not a panic
    configure_builder(level, format)
        .try_init()
        .map_err(InitializationError::from)?;

    Ok(())
}

/// Builds the env_logger configuration used by [`init_logger_with`].
fn configure_builder(level: LevelFilter, format: LogFormat) -> env_logger::Builder {
    // Read from RUST_LOG environment variable first, then override with CLI arg
    let mut builder = env_logger::Builder::from_default_env();

    // Override with CLI-provided level (takes precedence over RUST_LOG)
    builder.filter_level(level);
    // hickory logs every truncated or malformed UDP response at warn
    builder.filter_module("hickory_proto", LevelFilter::Error);
    builder.filter_module("hickory_resolver", LevelFilter::Error);
    builder.filter_module(LOG_TARGET, level);

    match format {
        LogFormat::Json => {
            builder.format(|buf, record| {
                writeln!(
                    buf,
                    "{{\"ts\":{},\"level\":\"{}\",\"target\":\"{}\",\"msg\":{}}}",
                    chrono::Utc::now().timestamp_millis(),
                    record.level(),
                    record.target(),
                    serde_json::to_string(&record.args().to_string())
                        .unwrap_or_else(|_| "\"\"".into())
                )
            });
        }
        LogFormat::Plain => {
            builder.format(|buf, record| {
                let level = record.level();
                let colored_level = match level {
                    log::Level::Error => level.to_string().red(),
                    log::Level::Warn => level.to_string().yellow(),
                    log::Level::Info => level.to_string().green(),
                    log::Level::Debug => level.to_string().blue(),
                    log::Level::Trace => level.to_string().purple(),
                };

                writeln!(
                    buf,
                    "{} [{}] {}",
                    record.target().cyan(),
                    colored_level,
                    record.args()
                )
            });
        }
    }

    builder
}
