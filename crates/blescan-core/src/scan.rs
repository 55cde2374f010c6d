//! Time-bounded device discovery.
//!
//! This module turns a scan window in seconds into a [`Duration`], runs one
//! discovery against a [`Discoverer`], and converts what was heard into
//! [`DeviceRecord`]s.

use std::time::Duration;

use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::record::DeviceRecord;
use crate::traits::Discoverer;

/// Default scan window in seconds.
pub const DEFAULT_TIMEOUT_SECS: f64 = 5.0;

/// Options for scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanOptions {
    /// How long to listen for advertisements.
    pub duration: Duration,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            duration: Duration::from_secs_f64(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl ScanOptions {
    /// Create new scan options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the scan duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Build options from a timeout in seconds. See [`duration_from_secs`].
    pub fn from_secs_f64(secs: f64) -> Result<Self> {
        Ok(Self::new().duration(duration_from_secs(secs)?))
    }
}

/// Convert a user-supplied timeout into a scan duration.
///
/// Zero and negative values are accepted and yield a zero-length scan.
/// NaN, infinity and values beyond `Duration::MAX` are rejected.
pub fn duration_from_secs(secs: f64) -> Result<Duration> {
    if !secs.is_finite() {
        return Err(Error::InvalidTimeout(secs));
    }
    if secs <= 0.0 {
        warn!("Non-positive scan timeout {}s, scanning for zero time", secs);
        return Ok(Duration::ZERO);
    }
    Duration::try_from_secs_f64(secs).map_err(|_| Error::InvalidTimeout(secs))
}

/// Run one discovery and return every device heard, in backend order.
///
/// Records are not deduplicated here; backends report each device once.
///
/// # Errors
///
/// Returns an error if:
/// - The BLE capability is unavailable
/// - The scan could not be started, stopped or enumerated
pub async fn scan<D: Discoverer + ?Sized>(
    discoverer: &D,
    options: &ScanOptions,
) -> Result<Vec<DeviceRecord>> {
    discoverer.ensure_available().await?;

    let advertisements = discoverer.discover(options.duration).await?;
    let records: Vec<DeviceRecord> = advertisements.into_iter().map(DeviceRecord::from).collect();

    info!("Found {} device(s)", records.len());
    Ok(records)
}
