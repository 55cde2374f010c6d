//! Core BLE discovery library for blescan.
//!
//! This crate runs a single, time-bounded Bluetooth Low Energy discovery and
//! turns what it hears into flat [`DeviceRecord`]s that can be filtered by
//! name and serialised.
//!
//! # Features
//!
//! - **Device discovery**: passive advertisement scanning for a fixed window
//! - **Pluggable backends**: the [`Discoverer`] trait, with a `btleplug`
//!   implementation and a [`MockDiscoverer`] for tests
//! - **Name filtering**: case-insensitive substring match that keeps order
//!
//! # Cargo Features
//!
//! - `btleplug` (default): platform BLE access. Without it,
//!   [`platform_discoverer`] returns a backend whose every call fails with
//!   [`Error::DependencyUnavailable`].
//!
//! # Platform Differences
//!
//! On macOS CoreBluetooth hides MAC addresses, so the record address is the
//! CoreBluetooth peripheral UUID. On Linux and Windows it is the MAC address.
//!
//! # Quick Start
//!
//! ```no_run
//! use blescan_core::{ScanOptions, filter_by_name, platform_discoverer, scan};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let discoverer = platform_discoverer();
//!     let records = scan::scan(&discoverer, &ScanOptions::from_secs_f64(5.0)?).await?;
//!
//!     for record in filter_by_name(records, Some("sensor")) {
//!         println!("{} {}", record.address, record.name);
//!     }
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod filter;
pub mod mock;
#[cfg(feature = "btleplug")]
pub mod platform;
pub mod record;
pub mod scan;
pub mod traits;
pub mod util;

pub use error::{Error, Result};
pub use filter::filter_by_name;
pub use mock::{MockDiscoverer, MockDiscovererBuilder};
#[cfg(feature = "btleplug")]
pub use platform::BtleplugDiscoverer;
pub use record::{Advertisement, Details, DeviceRecord};
pub use scan::{DEFAULT_TIMEOUT_SECS, ScanOptions, duration_from_secs};
pub use traits::{Discoverer, UnavailableDiscoverer};

/// The discovery backend for this build.
///
/// Nothing is opened here; the platform adapter is acquired on first use.
pub fn platform_discoverer() -> Box<dyn Discoverer> {
    #[cfg(feature = "btleplug")]
    {
        Box::new(BtleplugDiscoverer::new())
    }
    #[cfg(not(feature = "btleplug"))]
    {
        Box::new(UnavailableDiscoverer::default())
    }
}
