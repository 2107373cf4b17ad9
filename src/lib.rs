//! mail_dns_check library: mail DNS record checks for email domains
//!
//! This library reads email addresses line by line, extracts each domain, and
//! queries DNS for MX records, an SPF policy (TXT on the domain) and a DMARC
//! policy (TXT on `_dmarc.<domain>`), printing one summary line per input line.
//!
//! # Example
//!
//! ```no_run
//! use mail_dns_check::initialization::init_resolver;
//! use mail_dns_check::run_check;
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let resolver = init_resolver();
//! let input = "postmaster@example.com\nnot-an-email\n";
//! let mut output = tokio::io::stdout();
//!
//! let report = run_check(&resolver, input.as_bytes(), &mut output, false).await?;
//! println!("{} checked, {} invalid", report.checked, report.invalid);
//! # Ok(())
//! # }
//! ```
//!
//! # Requirements
//!
//! This library requires a Tokio runtime. Lookups are awaited one after another;
//! a current-thread runtime is enough.

#![warn(missing_docs)]

mod app;
mod checker;
pub mod config;
mod dns;
mod domain;
mod error_handling;
pub mod initialization;
mod run;

// Re-export public API
pub use checker::{check_domain, DomainRecordResult};
pub use config::{Config, LogFormat, LogLevel};
pub use dns::{
    dmarc_query_name, extract_dmarc_record, extract_spf_record, find_record_with_prefix,
    HickoryMailResolver, MailResolver, MxRecord, DMARC_PREFIX, SPF_PREFIX,
};
pub use domain::extract_domain;
pub use error_handling::{CheckError, InitializationError, LookupError, LookupKind, LookupStats};
pub use run::{open_input, run_check, CheckReport, InputSource};
