//! DNS querying for mail-related records.
//!
//! This module provides:
//! - The [`MailResolver`] capability (MX and TXT lookups)
//! - A `hickory-resolver` implementation using the system configuration
//! - SPF/DMARC extraction from TXT record sets

mod extract;
mod records;

// Re-export public API
pub use extract::{
    dmarc_query_name, extract_dmarc_record, extract_spf_record, find_record_with_prefix,
    DMARC_PREFIX, SPF_PREFIX,
};
#[cfg(test)]
pub use records::MockMailResolver;
pub use records::{HickoryMailResolver, MailResolver, MxRecord};
