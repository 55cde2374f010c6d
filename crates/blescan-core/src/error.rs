//! Error types for blescan-core.
//!
//! Every failure in the scan path maps onto one of three variants. Callers
//! are not expected to recover from any of them; the CLI reports the message
//! once and exits.
//!
//! | Error Type | Raised when |
//! |------------|-------------|
//! | [`Error::DependencyUnavailable`] | BLE support not compiled in, no manager, no adapter |
//! | [`Error::ScanFailure`] | The OS or adapter rejects starting, stopping or enumerating a scan |
//! | [`Error::InvalidTimeout`] | The requested scan window cannot be expressed as a duration |

use thiserror::Error;

/// Errors that can occur while discovering BLE devices.
///
/// This enum is marked `#[non_exhaustive]` to allow adding new error variants
/// in future versions without breaking downstream code.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The platform BLE capability is missing or cannot be opened.
    #[error("BLE unavailable: {0}")]
    DependencyUnavailable(String),

    /// The scan itself failed or was rejected by the OS/hardware layer.
    #[error("Scan failed: {0}")]
    ScanFailure(String),

    /// Scan timeout that cannot be turned into a duration (NaN, infinite, overflow).
    #[error("Invalid scan timeout: {0} seconds")]
    InvalidTimeout(f64),
}

impl Error {
    /// Create a dependency-unavailable error.
    pub fn unavailable(message: impl Into<String>) -> Self {
        Self::DependencyUnavailable(message.into())
    }

    /// Create a scan failure error.
    pub fn scan_failed(message: impl Into<String>) -> Self {
        Self::ScanFailure(message.into())
    }
}

/// Result type alias using blescan-core's Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unavailable("no Bluetooth adapter available");
        assert_eq!(err.to_string(), "BLE unavailable: no Bluetooth adapter available");

        let err = Error::scan_failed("Permission Denied");
        assert_eq!(err.to_string(), "Scan failed: Permission Denied");

        let err = Error::InvalidTimeout(f64::NAN);
        assert!(err.to_string().contains("NaN"));
    }

    #[test]
    fn test_error_debug() {
        let err = Error::unavailable("missing");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("DependencyUnavailable"));
    }
}
