//! Main application helpers.
//!
//! This module provides end-of-run statistics logging.

pub mod statistics;

// Re-export public API
pub use statistics::{print_lookup_statistics, print_run_summary};
