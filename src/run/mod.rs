//! Input loop: read, extract, check, print.
//!
//! Lines are processed strictly one at a time. All three lookups for a line
//! complete and its result is written before the next line is read.

use std::time::Instant;

use anyhow::{Context, Result};
use log::info;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use crate::app::print_run_summary;
use crate::checker::check_domain;
use crate::config::{Config, BANNER_FIELDS, BANNER_PROMPT, INVALID_EMAIL_PREFIX};
use crate::dns::MailResolver;
use crate::domain::extract_domain;
use crate::error_handling::{CheckError, LookupStats};

/// Boxed line source, either stdin or a file.
pub type InputSource = Box<dyn AsyncBufRead + Unpin + Send>;

/// Results of a check run.
#[derive(Debug)]
pub struct CheckReport {
    /// Lines read from input
    pub total_lines: usize,
    /// Lines with a valid domain that were checked
    pub checked: usize,
    /// Lines reported as invalid email addresses
    pub invalid: usize,
    /// Failed DNS queries, by lookup kind
    pub lookup_stats: LookupStats,
    /// Elapsed time in seconds
    pub elapsed_seconds: f64,
}

/// Opens the input source named by the configuration, `-` meaning stdin.
///
/// # Errors
///
/// Returns an error if the file cannot be opened.
pub async fn open_input(config: &Config) -> Result<InputSource> {
    let path = config.file.as_path();
    if config.reads_stdin() {
        info!("Reading email addresses from stdin");
        Ok(Box::new(BufReader::new(tokio::io::stdin())))
    } else {
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open input file: {}", path.display()))?;
        info!("Reading email addresses from {}", path.display());
        Ok(Box::new(BufReader::new(file)))
    }
}

/// Runs the checker over every line of `input`, writing one line per input line
/// to `output`.
///
/// # Arguments
///
/// * `resolver` - Name-resolution capability
/// * `input` - Line source, read until end of stream
/// * `output` - Destination for the banner and result lines
/// * `print_banner` - Write the prompt and field header first
///
/// # Errors
///
/// Returns `CheckError::Input` if the input cannot be read further and
/// `CheckError::Output` if writing fails. End of stream is not an error. Bytes
/// that are not valid UTF-8 are replaced with U+FFFD and the line is processed.
pub async fn run_check<R, I, W>(
    resolver: &R,
    mut input: I,
    output: &mut W,
    print_banner: bool,
) -> Result<CheckReport, CheckError>
where
    R: MailResolver + ?Sized,
    I: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let start_time = Instant::now();
    let lookup_stats = LookupStats::new();
    let mut total_lines = 0usize;
    let mut checked = 0usize;
    let mut invalid = 0usize;

    if print_banner {
        write_line(output, BANNER_PROMPT).await?;
        write_line(output, BANNER_FIELDS).await?;
    }

    let mut buf = Vec::new();
    loop {
        buf.clear();
        let read = input
            .read_until(b'\n', &mut buf)
            .await
            .map_err(CheckError::Input)?;
        if read == 0 {
            break;
        }
        total_lines += 1;
        let email = decode_line(&buf);
        let domain = extract_domain(&email);
        if domain.is_empty() {
            invalid += 1;
            write_line(output, &format!("{INVALID_EMAIL_PREFIX} {email}")).await?;
            continue;
        }

        let result = check_domain(resolver, &domain, &lookup_stats).await;
        checked += 1;
        write_line(output, &result.to_string()).await?;
    }

    let report = CheckReport {
        total_lines,
        checked,
        invalid,
        lookup_stats,
        elapsed_seconds: start_time.elapsed().as_secs_f64(),
    };
    print_run_summary(&report);
    Ok(report)
}

/// Strips the line terminator (`\n` or `\r\n`) and decodes lossily.
fn decode_line(raw: &[u8]) -> String {
    let line = raw.strip_suffix(b"\n").unwrap_or(raw);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    String::from_utf8_lossy(line).into_owned()
}

async fn write_line<W>(output: &mut W, line: &str) -> Result<(), CheckError>
where
    W: AsyncWrite + Unpin,
{
    output
        .write_all(line.as_bytes())
        .await
        .map_err(CheckError::Output)?;
    output.write_all(b"\n").await.map_err(CheckError::Output)?;
    // Interactive use reads results line by line
    output.flush().await.map_err(CheckError::Output)
}
