//! Error handling and lookup statistics.
//!
//! This module provides:
//! - Error type definitions (initialization, DNS lookup, fatal run errors)
//! - Lookup failure statistics, counted per query kind
//!
//! DNS lookup failures are never fatal. They are logged, counted here, and
//! reported as "record absent". Only input/output failures stop a run.

mod stats;
mod types;

// Re-export public API
pub use stats::LookupStats;
pub use types::{CheckError, InitializationError, LookupError, LookupKind};
