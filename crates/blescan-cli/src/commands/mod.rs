//! Command implementations for the CLI.

mod scan;

pub use scan::{EXIT_SCAN_ERROR, ScanArgs, cmd_scan, run_scan};
