//! Configuration constants.

/// Log target (crate name) whose level follows `--log-level`.
pub const LOG_TARGET: &str = "mail_dns_check";

/// Path value meaning "read from stdin".
pub const STDIN_PATH: &str = "-";

/// Prompt printed before any input is read.
pub const BANNER_PROMPT: &str = "Enter email addresses to check DNS records:";

/// Field order of each result line.
pub const BANNER_FIELDS: &str = "domain, hasMX, hasSPF, hasDMARC, spfRecord, dmarcRecord";

/// Prefix of the line printed for input that has no single `@`.
pub const INVALID_EMAIL_PREFIX: &str = "Invalid email address:";
