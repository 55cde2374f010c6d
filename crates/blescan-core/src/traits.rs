//! Trait abstractions for BLE discovery.
//!
//! This module provides the [`Discoverer`] trait that abstracts over the
//! platform BLE stack and mock backends for testing.

use std::time::Duration;

use async_trait::async_trait;

use crate::error::{Error, Result};
use crate::record::Advertisement;

/// A BLE discovery capability.
///
/// The capability may be missing on a given host. Implementations acquire
/// platform resources lazily and report absence as
/// [`Error::DependencyUnavailable`] on first use, never at construction.
///
/// # Example
///
/// ```ignore
/// use std::time::Duration;
/// use blescan_core::{Discoverer, Result};
///
/// async fn count_nearby<D: Discoverer + ?Sized>(d: &D) -> Result<usize> {
///     d.ensure_available().await?;
///     Ok(d.discover(Duration::from_secs(5)).await?.len())
/// }
/// ```
#[async_trait]
pub trait Discoverer: Send + Sync {
    /// Probe the capability, acquiring it if needed.
    async fn ensure_available(&self) -> Result<()>;

    /// Passively listen for `duration`, then return one advertisement per
    /// distinct device heard, in backend order.
    async fn discover(&self, duration: Duration) -> Result<Vec<Advertisement>>;
}

#[async_trait]
impl<D: Discoverer + ?Sized> Discoverer for Box<D> {
    async fn ensure_available(&self) -> Result<()> {
        (**self).ensure_available().await
    }

    async fn discover(&self, duration: Duration) -> Result<Vec<Advertisement>> {
        (**self).discover(duration).await
    }
}

/// The null capability: every call fails with [`Error::DependencyUnavailable`].
///
/// Stands in for the platform backend when the crate is built without the
/// `btleplug` feature.
#[derive(Debug, Clone)]
pub struct UnavailableDiscoverer {
    reason: String,
}

impl UnavailableDiscoverer {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }
}

impl Default for UnavailableDiscoverer {
    fn default() -> Self {
        Self::new("BLE support is not compiled in; rebuild with `--features btleplug`")
    }
}

#[async_trait]
impl Discoverer for UnavailableDiscoverer {
    async fn ensure_available(&self) -> Result<()> {
        Err(Error::unavailable(self.reason.clone()))
    }

    async fn discover(&self, _duration: Duration) -> Result<Vec<Advertisement>> {
        Err(Error::unavailable(self.reason.clone()))
    }
}
