use std::io;
use std::process::ExitCode;

use blescan_cli::cli::Cli;
use blescan_cli::commands::{ScanArgs, run_scan};
use blescan_cli::config::Config;
use blescan_core::platform_discoverer;
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    // Handle completions early (before tracing init)
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "blescan", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    // Logs go to stderr; stdout carries only scan output
    let filter = if cli.quiet {
        EnvFilter::new("error")
    } else if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let config = Config::load(cli.config.as_deref());
    let args = ScanArgs::resolve(&cli, &config);
    tracing::debug!("Resolved scan arguments: {:?}", args);

    let discoverer = platform_discoverer();
    let mut stdout = io::stdout().lock();
    ExitCode::from(run_scan(&discoverer, &args, &mut stdout).await)
}
