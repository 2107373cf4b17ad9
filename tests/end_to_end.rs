//! End-to-end tests for the input loop against a static resolver.
//!
//! These tests drive `run_check` with in-memory input and capture stdout-bound
//! output, so no network access is needed.

mod helpers;

use helpers::{run_without_banner, StaticResolver};
use mail_dns_check::{check_domain, LookupError, LookupKind, LookupStats};

#[tokio::test]
async fn test_spf_without_dmarc() {
    let resolver = StaticResolver::new()
        .with_mx("example.com", &[(10, "mx.example.com.")])
        .with_txt("example.com", &["v=spf1 include:_spf.example.com ~all"])
        .with_txt("_dmarc.example.com", &[]);

    let (report, output) = run_without_banner(&resolver, "user@example.com\n").await;

    assert_eq!(
        output,
        "domain: example.com, hasMX: true, hasSPF: true, hasDMARC: false, \
         spfRecord: v=spf1 include:_spf.example.com ~all, dmarcRecord: \n"
    );
    assert_eq!(report.checked, 1);
    assert_eq!(report.lookup_stats.total_failures(), 0);
}

#[tokio::test]
async fn test_invalid_line_exact_output_and_no_queries() {
    let resolver = StaticResolver::new();

    let (report, output) = run_without_banner(&resolver, "not-an-email\n").await;

    assert_eq!(output, "Invalid email address: not-an-email\n");
    assert!(resolver.queries().is_empty(), "no DNS queries expected");
    assert_eq!(report.invalid, 1);
}

#[tokio::test]
async fn test_queries_in_order_per_line() {
    let resolver = StaticResolver::new()
        .with_mx("a.example", &[])
        .with_mx("b.example", &[]);

    let input = "one@a.example\nbad@@line\ntwo@b.example\n";
    let (report, _output) = run_without_banner(&resolver, input).await;

    assert_eq!(
        resolver.queries(),
        vec![
            "MX a.example",
            "TXT a.example",
            "TXT _dmarc.a.example",
            "MX b.example",
            "TXT b.example",
            "TXT _dmarc.b.example",
        ]
    );
    assert_eq!(report.total_lines, 3);
    assert_eq!(report.checked, 2);
    assert_eq!(report.invalid, 1);
}

#[tokio::test]
async fn test_one_output_line_per_input_line() {
    let resolver = StaticResolver::new()
        .with_mx("example.org", &[(0, "mail.example.org.")])
        .with_txt("_dmarc.example.org", &["v=DMARC1; p=reject"]);

    let input = "alice@example.org\n\nbob\ncarol@example.org";
    let (_report, output) = run_without_banner(&resolver, input).await;

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines,
        vec![
            "domain: example.org, hasMX: true, hasSPF: false, hasDMARC: true, \
             spfRecord: , dmarcRecord: v=DMARC1; p=reject",
            "Invalid email address: ",
            "Invalid email address: bob",
            "domain: example.org, hasMX: true, hasSPF: false, hasDMARC: true, \
             spfRecord: , dmarcRecord: v=DMARC1; p=reject",
        ]
    );
}

#[tokio::test]
async fn test_lookup_failures_reported_as_absent() {
    let resolver = StaticResolver::new()
        .with_mx_error(
            "flaky.example",
            LookupError::Resolver("request timed out".to_string()),
        )
        .with_txt_error(
            "flaky.example",
            LookupError::Resolver("connection refused".to_string()),
        );

    let (report, output) = run_without_banner(&resolver, "x@flaky.example\n").await;

    assert_eq!(
        output,
        "domain: flaky.example, hasMX: false, hasSPF: false, hasDMARC: false, \
         spfRecord: , dmarcRecord: \n"
    );
    // The unknown DMARC name answers NoRecords, which also counts as a failure
    assert_eq!(report.lookup_stats.get_failure_count(LookupKind::Mx), 1);
    assert_eq!(report.lookup_stats.get_failure_count(LookupKind::Spf), 1);
    assert_eq!(report.lookup_stats.get_failure_count(LookupKind::Dmarc), 1);
}

#[tokio::test]
async fn test_check_domain_spf_first_match() {
    let resolver = StaticResolver::new().with_txt(
        "example.net",
        &[
            "apple-domain-verification=abc",
            "v=spf1 mx -all",
            "v=spf1 include:second.example ~all",
        ],
    );
    let stats = LookupStats::new();

    let result = check_domain(&resolver, "example.net", &stats).await;

    assert!(result.has_spf);
    assert_eq!(result.spf_record, "v=spf1 mx -all");
    assert!(!result.has_mx);
    assert!(!result.has_dmarc);
}

#[tokio::test]
async fn test_check_domain_dmarc_uses_underscore_name() {
    // A DMARC record on the bare domain is not picked up
    let resolver = StaticResolver::new().with_txt("example.net", &["v=DMARC1; p=none"]);
    let stats = LookupStats::new();

    let result = check_domain(&resolver, "example.net", &stats).await;

    assert!(!result.has_dmarc);
    assert_eq!(result.dmarc_record, "");
    assert!(resolver
        .queries()
        .contains(&"TXT _dmarc.example.net".to_string()));
}

#[tokio::test]
async fn test_banner_then_results() {
    let resolver = StaticResolver::new();
    let mut output: Vec<u8> = Vec::new();

    mail_dns_check::run_check(&resolver, "nope\n".as_bytes(), &mut output, true)
        .await
        .expect("run should succeed");

    let output = String::from_utf8(output).expect("output is UTF-8");
    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(lines[0], "Enter email addresses to check DNS records:");
    assert_eq!(
        lines[1],
        "domain, hasMX, hasSPF, hasDMARC, spfRecord, dmarcRecord"
    );
    assert_eq!(lines[2], "Invalid email address: nope");
}
