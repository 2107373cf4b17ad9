//! Statistics printing.

use log::info;
use strum::IntoEnumIterator;

use crate::error_handling::{LookupKind, LookupStats};
use crate::run::CheckReport;

/// Prints a one-line summary of the run followed by lookup failure counts.
///
/// Everything goes to the log, so stdout keeps only result lines.
pub fn print_run_summary(report: &CheckReport) {
    info!(
        "Processed {} line{} ({} checked, {} invalid) in {:.1}s",
        report.total_lines,
        if report.total_lines == 1 { "" } else { "s" },
        report.checked,
        report.invalid,
        report.elapsed_seconds
    );
    print_lookup_statistics(&report.lookup_stats);
}

/// Prints failed lookup counts per kind, if there were any.
///
/// These are the lookups whose records were reported as absent because the
/// query itself failed.
pub fn print_lookup_statistics(stats: &LookupStats) {
    let total_failures = stats.total_failures();
    if total_failures == 0 {
        return;
    }

    info!("Lookup Failure Counts ({} total):", total_failures);
    for kind in LookupKind::iter() {
        let count = stats.get_failure_count(kind);
        if count > 0 {
            info!("   {}: {}", kind.as_str(), count);
        }
    }
}
