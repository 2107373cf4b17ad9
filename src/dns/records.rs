//! DNS record queries (MX, TXT).
//!
//! Lookups go through the [`MailResolver`] capability so that the checker can run
//! against the system resolver in production and against a fake in tests.

use std::sync::Arc;

use async_trait::async_trait;
use hickory_resolver::proto::rr::{RData, RecordType};
use hickory_resolver::TokioAsyncResolver;

use crate::error_handling::LookupError;

/// A single mail exchanger entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MxRecord {
    /// Preference value (lower is preferred)
    pub preference: u16,
    /// Exchange hostname
    pub exchange: String,
}

impl MxRecord {
    /// Creates an MX record.
    pub fn new(preference: u16, exchange: impl Into<String>) -> Self {
        Self {
            preference,
            exchange: exchange.into(),
        }
    }
}

/// Name-resolution capability needed to check a mail domain.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MailResolver: Send + Sync {
    /// Queries MX records for `name`.
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError>;

    /// Queries TXT records for `name`, one string per record.
    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError>;
}

/// [`MailResolver`] backed by `hickory-resolver`.
#[derive(Clone)]
pub struct HickoryMailResolver {
    resolver: Arc<TokioAsyncResolver>,
}

impl HickoryMailResolver {
    /// Wraps an existing resolver.
    pub fn new(resolver: Arc<TokioAsyncResolver>) -> Self {
        Self { resolver }
    }
}

#[async_trait]
impl MailResolver for HickoryMailResolver {
    /// Returns records sorted by preference (lower = higher priority).
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        let lookup = self.resolver.lookup(name, RecordType::MX).await?;
        let mut mx_records: Vec<MxRecord> = lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::MX(mx) = rdata {
                    Some(MxRecord::new(mx.preference(), mx.exchange().to_utf8()))
                } else {
                    None
                }
            })
            .collect();
        mx_records.sort_by_key(|mx| mx.preference);
        Ok(mx_records)
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        let lookup = self.resolver.lookup(name, RecordType::TXT).await?;
        let txt_records: Vec<String> = lookup
            .iter()
            .filter_map(|rdata| {
                if let RData::TXT(txt) = rdata {
                    // A TXT record can hold several character strings - join them
                    Some(
                        txt.iter()
                            .map(|bytes| String::from_utf8_lossy(bytes).to_string())
                            .collect::<Vec<String>>()
                            .join(""),
                    )
                } else {
                    None
                }
            })
            .collect();
        Ok(txt_records)
    }
}
