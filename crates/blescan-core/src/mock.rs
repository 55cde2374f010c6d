//! Mock discovery backend for testing.
//!
//! [`MockDiscoverer`] implements [`Discoverer`] without touching any BLE
//! hardware, so the full scan path can be exercised in unit tests and CI.
//!
//! # Features
//!
//! - **Scripted results**: return a fixed list of advertisements
//! - **Failure injection**: report the capability as unavailable, or fail the scan
//! - **Timing**: optionally sleep for the requested duration (pair with a paused tokio clock)

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Error, Result};
use crate::record::Advertisement;
use crate::traits::Discoverer;

/// A scripted discovery backend.
///
/// # Example
///
/// ```
/// use blescan_core::{Advertisement, MockDiscoverer, ScanOptions, scan};
///
/// #[tokio::main]
/// async fn main() {
///     let mock = MockDiscoverer::builder()
///         .advertisement(Advertisement::new("11:22:33:44:55:66").with_name("Widget"))
///         .build();
///
///     let records = scan::scan(&mock, &ScanOptions::default()).await.unwrap();
///     assert_eq!(records[0].name, "Widget");
/// }
/// ```
pub struct MockDiscoverer {
    advertisements: RwLock<Vec<Advertisement>>,
    available: AtomicBool,
    unavailable_message: RwLock<String>,
    scan_error: RwLock<Option<String>>,
    /// Sleep for the requested duration before returning.
    honor_duration: AtomicBool,
    scan_count: AtomicU32,
    last_duration: RwLock<Option<Duration>>,
}

impl std::fmt::Debug for MockDiscoverer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MockDiscoverer")
            .field("available", &self.available.load(Ordering::Relaxed))
            .field("scan_count", &self.scan_count.load(Ordering::Relaxed))
            .finish()
    }
}

impl Default for MockDiscoverer {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl MockDiscoverer {
    /// Create a mock that reports `advertisements` on every scan.
    pub fn new(advertisements: Vec<Advertisement>) -> Self {
        Self {
            advertisements: RwLock::new(advertisements),
            available: AtomicBool::new(true),
            unavailable_message: RwLock::new("mock BLE capability unavailable".to_string()),
            scan_error: RwLock::new(None),
            honor_duration: AtomicBool::new(false),
            scan_count: AtomicU32::new(0),
            last_duration: RwLock::new(None),
        }
    }

    /// Start building a mock.
    pub fn builder() -> MockDiscovererBuilder {
        MockDiscovererBuilder::new()
    }

    /// Replace the scripted advertisements.
    pub async fn set_advertisements(&self, advertisements: Vec<Advertisement>) {
        *self.advertisements.write().await = advertisements;
    }

    /// Mark the capability as missing (or present again).
    pub async fn set_unavailable(&self, unavailable: bool, message: Option<&str>) {
        self.available.store(!unavailable, Ordering::Relaxed);
        if let Some(msg) = message {
            *self.unavailable_message.write().await = msg.to_string();
        }
    }

    /// Make subsequent scans fail with `message`, or succeed again with `None`.
    pub async fn set_scan_error(&self, message: Option<&str>) {
        *self.scan_error.write().await = message.map(str::to_string);
    }

    /// Number of `discover` calls that reached the backend.
    pub fn scan_count(&self) -> u32 {
        self.scan_count.load(Ordering::Relaxed)
    }

    /// Duration passed to the most recent `discover` call.
    pub async fn last_duration(&self) -> Option<Duration> {
        *self.last_duration.read().await
    }

    async fn check_available(&self) -> Result<()> {
        if self.available.load(Ordering::Relaxed) {
            Ok(())
        } else {
            Err(Error::unavailable(self.unavailable_message.read().await.clone()))
        }
    }
}

#[async_trait]
impl Discoverer for MockDiscoverer {
    async fn ensure_available(&self) -> Result<()> {
        self.check_available().await
    }

    async fn discover(&self, duration: Duration) -> Result<Vec<Advertisement>> {
        self.check_available().await?;
        self.scan_count.fetch_add(1, Ordering::Relaxed);
        *self.last_duration.write().await = Some(duration);

        if self.honor_duration.load(Ordering::Relaxed) {
            tokio::time::sleep(duration).await;
        }

        if let Some(msg) = self.scan_error.read().await.as_ref() {
            return Err(Error::scan_failed(msg.clone()));
        }

        Ok(self.advertisements.read().await.clone())
    }
}

/// Builder for [`MockDiscoverer`].
#[derive(Debug, Default)]
pub struct MockDiscovererBuilder {
    advertisements: Vec<Advertisement>,
    unavailable: Option<String>,
    scan_error: Option<String>,
    honor_duration: bool,
}

impl MockDiscovererBuilder {
    /// Create a new builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one advertisement to the scripted results.
    #[must_use]
    pub fn advertisement(mut self, advertisement: Advertisement) -> Self {
        self.advertisements.push(advertisement);
        self
    }

    /// Add several advertisements to the scripted results.
    #[must_use]
    pub fn advertisements(mut self, advertisements: impl IntoIterator<Item = Advertisement>) -> Self {
        self.advertisements.extend(advertisements);
        self
    }

    /// Report the capability as unavailable with `message`.
    #[must_use]
    pub fn unavailable(mut self, message: &str) -> Self {
        self.unavailable = Some(message.to_string());
        self
    }

    /// Fail every scan with `message`.
    #[must_use]
    pub fn scan_error(mut self, message: &str) -> Self {
        self.scan_error = Some(message.to_string());
        self
    }

    /// Sleep for the requested scan duration.
    #[must_use]
    pub fn honor_duration(mut self, honor: bool) -> Self {
        self.honor_duration = honor;
        self
    }

    /// Build the mock.
    #[must_use]
    pub fn build(self) -> MockDiscoverer {
        let mut mock = MockDiscoverer::new(self.advertisements);
        mock.honor_duration.store(self.honor_duration, Ordering::Relaxed);
        if let Some(msg) = self.unavailable {
            mock.available.store(false, Ordering::Relaxed);
            mock.unavailable_message = RwLock::new(msg);
        }
        mock.scan_error = RwLock::new(self.scan_error);
        mock
    }
}
