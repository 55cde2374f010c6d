//! CLI argument definitions using clap.

use std::path::PathBuf;

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "blescan")]
#[command(author, version, about = "Scan for nearby Bluetooth LE devices", long_about = None)]
pub struct Cli {
    /// Scan duration in seconds [default: 5.0]
    #[arg(short, long, allow_negative_numbers = true)]
    pub timeout: Option<f64>,

    /// Case-insensitive substring to filter by device name
    #[arg(short, long)]
    pub filter_name: Option<String>,

    /// Also print the results as a JSON array after the text lines
    #[arg(long)]
    pub json: bool,

    /// Read defaults from this config file
    #[arg(long, env = "BLESCAN_CONFIG")]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<clap_complete::Shell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["blescan"]).unwrap();
        assert_eq!(cli.timeout, None);
        assert_eq!(cli.filter_name, None);
        assert!(!cli.json);
        assert!(!cli.verbose);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_short_and_long_flags() {
        let cli = Cli::try_parse_from(["blescan", "-t", "8", "-f", "Sensor", "--json"]).unwrap();
        assert_eq!(cli.timeout, Some(8.0));
        assert_eq!(cli.filter_name.as_deref(), Some("Sensor"));
        assert!(cli.json);

        let cli =
            Cli::try_parse_from(["blescan", "--timeout", "1.5", "--filter-name", "x"]).unwrap();
        assert_eq!(cli.timeout, Some(1.5));
        assert_eq!(cli.filter_name.as_deref(), Some("x"));
    }

    #[test]
    fn test_non_positive_timeout_accepted() {
        let cli = Cli::try_parse_from(["blescan", "-t", "-1"]).unwrap();
        assert_eq!(cli.timeout, Some(-1.0));

        let cli = Cli::try_parse_from(["blescan", "--timeout", "0"]).unwrap();
        assert_eq!(cli.timeout, Some(0.0));
    }

    #[test]
    fn test_non_float_timeout_rejected() {
        let err = Cli::try_parse_from(["blescan", "--timeout", "soon"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ValueValidation);
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        assert!(Cli::try_parse_from(["blescan", "-v", "-q"]).is_err());
    }
}
