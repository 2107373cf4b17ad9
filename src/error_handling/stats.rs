//! Lookup failure statistics.
//!
//! Counts failed DNS queries per lookup kind over a run. Output lines cannot tell
//! "checked, absent" apart from "check failed", so these counters are where that
//! difference is reported.

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use strum::IntoEnumIterator;

use super::types::LookupKind;

/// Thread-safe lookup failure tracker.
///
/// All lookup kinds are initialized to zero on creation.
#[derive(Debug)]
pub struct LookupStats {
    failures: HashMap<LookupKind, AtomicUsize>,
}

impl LookupStats {
    /// Creates a tracker with every counter at zero.
    pub fn new() -> Self {
        let mut failures = HashMap::new();
        for kind in LookupKind::iter() {
            failures.insert(kind, AtomicUsize::new(0));
        }
        LookupStats { failures }
    }

    /// Increment the failure counter for a lookup kind.
    pub fn increment_failure(&self, kind: LookupKind) {
        if let Some(counter) = self.failures.get(&kind) {
            counter.fetch_add(1, Ordering::Relaxed);
        } else {
            log::error!(
                "Attempted to increment failure counter for {:?} which is not in the map. \
                 This indicates a bug in LookupStats initialization.",
                kind
            );
        }
    }

    /// Get the failure count for a lookup kind.
    pub fn get_failure_count(&self, kind: LookupKind) -> usize {
        self.failures
            .get(&kind)
            .map(|c| c.load(Ordering::SeqCst))
            .unwrap_or(0)
    }

    /// Get total failure count across all lookup kinds.
    pub fn total_failures(&self) -> usize {
        LookupKind::iter().map(|k| self.get_failure_count(k)).sum()
    }
}

impl Default for LookupStats {
    fn default() -> Self {
        Self::new()
    }
}
