//! Scan command implementation.

use std::io::Write;

use anyhow::Result;
use blescan_core::{Discoverer, ScanOptions, filter_by_name, scan};
use tracing::debug;

use crate::cli::Cli;
use crate::config::{Config, resolve_filter_name, resolve_timeout};
use crate::format::{format_progress, format_scan_json, format_scan_text};

/// Exit code for any failure during scan or output.
pub const EXIT_SCAN_ERROR: u8 = 2;

/// Fully resolved scan arguments.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanArgs {
    /// Scan duration in seconds, passed through unvalidated.
    pub timeout: f64,
    pub filter_name: Option<String>,
    pub json: bool,
}

impl ScanArgs {
    /// Merge command-line flags over config file values.
    pub fn resolve(cli: &Cli, config: &Config) -> Self {
        Self {
            timeout: resolve_timeout(cli.timeout, config),
            filter_name: resolve_filter_name(cli.filter_name.clone(), config),
            json: cli.json || config.json,
        }
    }
}

/// Scan, filter and print. Returns the number of devices reported.
///
/// The progress line is only printed once the BLE capability has been
/// acquired. JSON follows the text lines and is skipped when nothing matched.
pub async fn cmd_scan<D, W>(discoverer: &D, args: &ScanArgs, out: &mut W) -> Result<usize>
where
    D: Discoverer + ?Sized,
    W: Write,
{
    let options = ScanOptions::from_secs_f64(args.timeout)?;

    discoverer.ensure_available().await?;
    writeln!(out, "{}", format_progress(args.timeout))?;
    out.flush()?;

    let records = scan::scan(discoverer, &options).await?;
    let records = filter_by_name(records, args.filter_name.as_deref());
    debug!("{} device(s) after name filter", records.len());

    out.write_all(format_scan_text(&records).as_bytes())?;
    if args.json && !records.is_empty() {
        out.write_all(format_scan_json(&records)?.as_bytes())?;
    }
    out.flush()?;

    Ok(records.len())
}

/// Run [`cmd_scan`] and turn the outcome into a process exit code.
///
/// Errors are reported once as `Error during scan: <message>` on `out`.
pub async fn run_scan<D, W>(discoverer: &D, args: &ScanArgs, out: &mut W) -> u8
where
    D: Discoverer + ?Sized,
    W: Write,
{
    match cmd_scan(discoverer, args, out).await {
        Ok(_) => 0,
        Err(e) => {
            debug!("Scan failed: {:#}", e);
            let _ = writeln!(out, "Error during scan: {:#}", e);
            EXIT_SCAN_ERROR
        }
    }
}
