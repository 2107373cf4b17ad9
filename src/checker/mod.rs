//! Per-domain mail record checks.
//!
//! [`check_domain`] runs the MX, SPF and DMARC lookups for one domain, in that
//! order, and folds them into a [`DomainRecordResult`]. Lookup failures never
//! abort the check: each is logged, counted, and reported as "record absent".

use std::fmt;

use log::{debug, warn};

use crate::dns::{dmarc_query_name, extract_dmarc_record, extract_spf_record, MailResolver};
use crate::error_handling::{LookupError, LookupKind, LookupStats};

/// Mail record summary for one domain.
///
/// Built fresh for each input line and discarded once printed. The `Display`
/// impl is the output line format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DomainRecordResult {
    /// Domain that was checked
    pub domain: String,
    /// At least one MX record was returned
    pub has_mx: bool,
    /// A TXT record starting with `v=spf1` was found
    pub has_spf: bool,
    /// The matching SPF record, empty if none
    pub spf_record: String,
    /// A TXT record starting with `v=DMARC1` was found at `_dmarc.<domain>`
    pub has_dmarc: bool,
    /// The matching DMARC record, empty if none
    pub dmarc_record: String,
}

impl fmt::Display for DomainRecordResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "domain: {}, hasMX: {}, hasSPF: {}, hasDMARC: {}, spfRecord: {}, dmarcRecord: {}",
            self.domain,
            self.has_mx,
            self.has_spf,
            self.has_dmarc,
            self.spf_record,
            self.dmarc_record
        )
    }
}

/// Checks the mail-related DNS records of a domain.
///
/// # Arguments
///
/// * `resolver` - Name-resolution capability used for all three queries
/// * `domain` - Domain to check, as extracted from the input line
/// * `stats` - Failure counters, incremented once per failed query
pub async fn check_domain<R>(
    resolver: &R,
    domain: &str,
    stats: &LookupStats,
) -> DomainRecordResult
where
    R: MailResolver + ?Sized,
{
    let mut result = DomainRecordResult {
        domain: domain.to_string(),
        ..Default::default()
    };

    match resolver.lookup_mx(domain).await {
        Ok(mx_records) => {
            debug!("{} MX record(s) for {domain}", mx_records.len());
            result.has_mx = !mx_records.is_empty();
        }
        Err(e) => record_failure(stats, LookupKind::Mx, domain, &e),
    }

    match resolver.lookup_txt(domain).await {
        Ok(txt_records) => {
            if let Some(spf) = extract_spf_record(&txt_records) {
                result.has_spf = true;
                result.spf_record = spf;
            }
        }
        Err(e) => record_failure(stats, LookupKind::Spf, domain, &e),
    }

    match resolver.lookup_txt(&dmarc_query_name(domain)).await {
        Ok(txt_records) => {
            if let Some(dmarc) = extract_dmarc_record(&txt_records) {
                result.has_dmarc = true;
                result.dmarc_record = dmarc;
            }
        }
        Err(e) => record_failure(stats, LookupKind::Dmarc, domain, &e),
    }

    result
}

fn record_failure(stats: &LookupStats, kind: LookupKind, domain: &str, e: &LookupError) {
    let record_type = match kind {
        LookupKind::Mx => "MX",
        LookupKind::Spf => "TXT",
        LookupKind::Dmarc => "DMARC",
    };
    warn!("Error looking up {record_type} records for domain {domain}: {e}");
    stats.increment_failure(kind);
}
