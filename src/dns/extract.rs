//! DNS record extraction utilities.
//!
//! This module provides functions to pick specific policy records out of
//! TXT record collections, such as SPF and DMARC records.

/// Prefix identifying an SPF record.
pub const SPF_PREFIX: &str = "v=spf1";

/// Prefix identifying a DMARC record.
pub const DMARC_PREFIX: &str = "v=DMARC1";

/// Label prepended to a domain to form its DMARC query name.
pub const DMARC_LABEL: &str = "_dmarc.";

/// Returns the first record that starts with `prefix`, in the order given.
///
/// The match is a literal, case-sensitive prefix check against the untrimmed
/// record text. The matching record is returned verbatim.
pub fn find_record_with_prefix(txt_records: &[String], prefix: &str) -> Option<String> {
    txt_records
        .iter()
        .find(|txt| txt.starts_with(prefix))
        .cloned()
}

/// Extracts SPF record from TXT records.
///
/// SPF records start with "v=spf1".
///
/// # Arguments
///
/// * `txt_records` - TXT record strings in resolver order
///
/// # Returns
///
/// The first SPF record found, or `None` if no SPF record exists.
pub fn extract_spf_record(txt_records: &[String]) -> Option<String> {
    find_record_with_prefix(txt_records, SPF_PREFIX)
}

/// Extracts DMARC record from TXT records.
///
/// The records should come from `_dmarc.<domain>` (see [`dmarc_query_name`]).
/// DMARC records start with "v=DMARC1".
pub fn extract_dmarc_record(txt_records: &[String]) -> Option<String> {
    find_record_with_prefix(txt_records, DMARC_PREFIX)
}

/// Builds the name queried for a domain's DMARC policy.
pub fn dmarc_query_name(domain: &str) -> String {
    format!("{DMARC_LABEL}{domain}")
}
