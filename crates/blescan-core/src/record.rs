//! Discovered device records.
//!
//! A [`Discoverer`](crate::Discoverer) reports what it heard as raw
//! [`Advertisement`]s. Those are normalised into [`DeviceRecord`]s, the only
//! shape the rest of the program works with.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Open key/value metadata attached to a record.
pub type Details = Map<String, Value>;

/// A device as reported by a discovery backend, before normalisation.
///
/// Backends differ in where they put advertisement metadata, so two optional
/// mappings are carried: `metadata` is preferred, `details` is the fallback.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Advertisement {
    /// Link-layer address (or platform identifier when the address is hidden).
    pub address: String,
    /// Advertised local name, if any.
    pub name: Option<String>,
    /// Received signal strength in dBm.
    pub rssi: Option<i16>,
    /// Primary metadata mapping.
    pub metadata: Option<Details>,
    /// Secondary metadata mapping, used when `metadata` is absent or empty.
    pub details: Option<Details>,
}

impl Advertisement {
    /// Create an advertisement with only an address.
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            ..Self::default()
        }
    }

    /// Set the advertised name.
    #[must_use]
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the RSSI.
    #[must_use]
    pub fn with_rssi(mut self, rssi: i16) -> Self {
        self.rssi = Some(rssi);
        self
    }

    /// Set the primary metadata mapping.
    #[must_use]
    pub fn with_metadata(mut self, metadata: Details) -> Self {
        self.metadata = Some(metadata);
        self
    }

    /// Set the secondary details mapping.
    #[must_use]
    pub fn with_details(mut self, details: Details) -> Self {
        self.details = Some(details);
        self
    }
}

/// A discovered BLE device.
///
/// Field order is the JSON key order: `address`, `name`, `rssi`, `details`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DeviceRecord {
    pub address: String,
    /// Empty when the device did not advertise a name.
    pub name: String,
    pub rssi: Option<i16>,
    pub details: Details,
}

impl DeviceRecord {
    /// Whether the device advertised a non-empty name.
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }
}

impl From<Advertisement> for DeviceRecord {
    fn from(adv: Advertisement) -> Self {
        let details = match (adv.metadata, adv.details) {
            (Some(metadata), _) if !metadata.is_empty() => metadata,
            (_, Some(details)) => details,
            _ => Details::new(),
        };

        Self {
            address: adv.address,
            name: adv.name.unwrap_or_default(),
            rssi: adv.rssi,
            details,
        }
    }
}
