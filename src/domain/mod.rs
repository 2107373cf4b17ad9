//! Domain extraction from email-like input.
//!
//! The only rule applied here is the split on `@`: exactly one separator must be
//! present. No character set, length, or case checks are performed.

/// Extracts the domain part of an email address.
///
/// # Arguments
///
/// * `email` - A raw input line, treated as an email address
///
/// # Returns
///
/// The substring after the `@` when the input splits into exactly two parts,
/// otherwise an empty string. Callers treat the empty string as invalid input.
pub fn extract_domain(email: &str) -> String {
    let mut parts = email.split('@');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(_local), Some(domain), None) => domain.to_string(),
        _ => String::new(),
    }
}
