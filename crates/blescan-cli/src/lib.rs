//! Command-line scanner for nearby Bluetooth Low Energy devices.
//!
//! `blescan` listens for BLE advertisements for a fixed time, optionally
//! keeps only devices whose name contains a substring, and prints one line
//! per device. With `--json` the same devices are printed again as a JSON
//! array.
//!
//! # Options
//!
//! | Flag | Description |
//! |------|-------------|
//! | `-t, --timeout <SECS>` | Scan duration (default 5.0) |
//! | `-f, --filter-name <TEXT>` | Case-insensitive name filter |
//! | `--json` | Also print a JSON array |
//! | `--config <PATH>` | Config file (also `BLESCAN_CONFIG`) |
//! | `-v, --verbose` / `-q, --quiet` | Log verbosity on stderr |
//! | `--completions <SHELL>` | Print a completion script |
//!
//! # Exit Codes
//!
//! - `0`: scan completed, including when no devices were found
//! - `2`: the scan or its output failed, or the arguments were invalid
//!
//! # Configuration
//!
//! Defaults can be stored in `~/.config/blescan/config.toml` (or platform
//! equivalent):
//!
//! ```toml
//! timeout = 8.0
//! filter_name = "sensor"
//! json = false
//! ```
//!
//! # Examples
//!
//! ```bash
//! blescan --timeout 8
//! blescan --timeout 10 --filter-name "MySensor" --json
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod format;

// Re-export core dependencies for convenience
pub use blescan_core;
