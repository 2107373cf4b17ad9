//! Error type definitions.
//!
//! This module defines the error types used throughout the application and the
//! lookup kinds that DNS failures are counted under.

use hickory_resolver::error::{ResolveError, ResolveErrorKind};
use log::SetLoggerError;
use strum_macros::EnumIter as EnumIterMacro;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// A failed DNS query.
///
/// The checker folds both variants into "record absent" when building its
/// result. The distinction only survives in the logs and statistics.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    /// NXDOMAIN or an empty answer.
    #[error("no records found")]
    NoRecords,

    /// Any other resolver failure (timeout, network error, malformed response).
    #[error("{0}")]
    Resolver(String),
}

impl From<ResolveError> for LookupError {
    fn from(e: ResolveError) -> Self {
        match e.kind() {
            ResolveErrorKind::NoRecordsFound { .. } => LookupError::NoRecords,
            _ => LookupError::Resolver(e.to_string()),
        }
    }
}

/// Fatal errors that stop a check run.
#[derive(Error, Debug)]
pub enum CheckError {
    /// The input stream could not be read further.
    #[error("Could not read from input: {0}")]
    Input(#[source] std::io::Error),

    /// A result line could not be written to the output stream.
    #[error("Could not write to output: {0}")]
    Output(#[source] std::io::Error),
}

/// The DNS query a failure belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
pub enum LookupKind {
    /// MX query on the domain
    Mx,
    /// TXT query on the domain, scanned for SPF
    Spf,
    /// TXT query on `_dmarc.<domain>`
    Dmarc,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl LookupKind {
    /// Returns a human-readable label for the lookup.
    pub fn as_str(&self) -> &'static str {
        match self {
            LookupKind::Mx => "DNS MX lookup error",
            LookupKind::Spf => "DNS TXT (SPF) lookup error",
            LookupKind::Dmarc => "DNS TXT (DMARC) lookup error",
        }
    }
}
