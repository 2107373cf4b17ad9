//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `mail_dns_check` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger and resolver initialization
//! - Exit status on fatal input errors
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use mail_dns_check::initialization::{init_logger_with, init_resolver};
use mail_dns_check::{open_input, run_check, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load environment variables from .env file (if it exists), e.g. RUST_LOG
    // Try the current directory first, then the executable's directory
    if dotenvy::dotenv().is_err() {
        if let Ok(exe_path) = std::env::current_exe() {
            if let Some(exe_dir) = exe_path.parent() {
                let env_path = exe_dir.join(".env");
                if env_path.exists() {
                    let _ = dotenvy::from_path(&env_path);
                }
            }
        }
    }

    let config = Config::parse();

    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    let resolver = init_resolver();
    let input = open_input(&config).await?;
    let mut stdout = tokio::io::stdout();

    match run_check(&resolver, input, &mut stdout, !config.no_banner).await {
        Ok(_report) => Ok(()),
        Err(e) => {
            log::error!("Error: {e}");
            process::exit(1);
        }
    }
}
