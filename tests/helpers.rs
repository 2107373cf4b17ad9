// Shared test helpers: a static in-memory resolver.
//
// This module is included by other test files with `mod helpers;`.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use mail_dns_check::{LookupError, MailResolver, MxRecord};

/// Resolver answering from fixed tables and recording every queried name.
///
/// Names missing from a table answer `LookupError::NoRecords`, like NXDOMAIN.
#[derive(Default)]
pub struct StaticResolver {
    mx: HashMap<String, Result<Vec<MxRecord>, LookupError>>,
    txt: HashMap<String, Result<Vec<String>, LookupError>>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StaticResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mx(mut self, name: &str, records: &[(u16, &str)]) -> Self {
        let records = records
            .iter()
            .map(|(preference, exchange)| MxRecord::new(*preference, *exchange))
            .collect();
        self.mx.insert(name.to_string(), Ok(records));
        self
    }

    pub fn with_mx_error(mut self, name: &str, error: LookupError) -> Self {
        self.mx.insert(name.to_string(), Err(error));
        self
    }

    pub fn with_txt(mut self, name: &str, records: &[&str]) -> Self {
        let records = records.iter().map(|s| s.to_string()).collect();
        self.txt.insert(name.to_string(), Ok(records));
        self
    }

    pub fn with_txt_error(mut self, name: &str, error: LookupError) -> Self {
        self.txt.insert(name.to_string(), Err(error));
        self
    }

    /// Names queried so far, prefixed with the record type (`MX ` or `TXT `).
    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().expect("query log poisoned").clone()
    }

    fn log_query(&self, record_type: &str, name: &str) {
        self.queries
            .lock()
            .expect("query log poisoned")
            .push(format!("{record_type} {name}"));
    }
}

#[async_trait]
impl MailResolver for StaticResolver {
    async fn lookup_mx(&self, name: &str) -> Result<Vec<MxRecord>, LookupError> {
        self.log_query("MX", name);
        self.mx
            .get(name)
            .cloned()
            .unwrap_or(Err(LookupError::NoRecords))
    }

    async fn lookup_txt(&self, name: &str) -> Result<Vec<String>, LookupError> {
        self.log_query("TXT", name);
        self.txt
            .get(name)
            .cloned()
            .unwrap_or(Err(LookupError::NoRecords))
    }
}

/// Runs the checker over `input` without a banner and returns the printed text.
#[allow(dead_code)]
pub async fn run_without_banner(
    resolver: &StaticResolver,
    input: &str,
) -> (mail_dns_check::CheckReport, String) {
    let mut output: Vec<u8> = Vec::new();
    let report = mail_dns_check::run_check(resolver, input.as_bytes(), &mut output, false)
        .await
        .expect("run should succeed");
    (report, String::from_utf8(output).expect("output is UTF-8"))
}
