//! Platform BLE discovery through `btleplug`.
//!
//! | Platform | BLE Stack | Address Format |
//! |----------|-----------|----------------|
//! | macOS | CoreBluetooth | UUID (MAC addresses are hidden) |
//! | Linux | BlueZ over D-Bus | MAC address |
//! | Windows | WinRT | MAC address |
//!
//! The adapter is opened on first use and kept for the life of the
//! discoverer, so a host without Bluetooth only fails once something
//! actually asks for a scan.

use std::time::Duration;

use async_trait::async_trait;
use btleplug::api::{
    Central, CentralEvent, Manager as _, Peripheral as _, PeripheralProperties, ScanFilter,
};
use btleplug::platform::{Adapter, Manager, PeripheralId};
use serde_json::Value;
use tokio::sync::OnceCell;
use tokio::time::Instant;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::record::{Advertisement, Details};
use crate::traits::Discoverer;
use crate::util::{collect_until, create_identifier, first_seen, format_peripheral_id, to_hex};

/// Discovers devices with the first Bluetooth adapter `btleplug` reports.
#[derive(Default)]
pub struct BtleplugDiscoverer {
    adapter: OnceCell<Adapter>,
}

impl std::fmt::Debug for BtleplugDiscoverer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BtleplugDiscoverer")
            .field("initialized", &self.adapter.initialized())
            .finish()
    }
}

impl BtleplugDiscoverer {
    pub fn new() -> Self {
        Self::default()
    }

    async fn adapter(&self) -> Result<&Adapter> {
        self.adapter.get_or_try_init(open_first_adapter).await
    }
}

async fn open_first_adapter() -> Result<Adapter> {
    let manager = Manager::new()
        .await
        .map_err(|e| Error::unavailable(format!("cannot open Bluetooth manager: {}", e)))?;
    let adapters = manager
        .adapters()
        .await
        .map_err(|e| Error::unavailable(format!("cannot list Bluetooth adapters: {}", e)))?;

    let adapter = adapters
        .into_iter()
        .next()
        .ok_or_else(|| Error::unavailable("no Bluetooth adapter available"))?;

    if let Ok(info) = adapter.adapter_info().await {
        debug!("Using adapter {}", info);
    }
    Ok(adapter)
}

#[async_trait]
impl Discoverer for BtleplugDiscoverer {
    async fn ensure_available(&self) -> Result<()> {
        self.adapter().await.map(|_| ())
    }

    async fn discover(&self, duration: Duration) -> Result<Vec<Advertisement>> {
        let adapter = self.adapter().await?;

        // Subscribe before the scan starts.
        let events = adapter
            .events()
            .await
            .map_err(|e| Error::scan_failed(format!("cannot subscribe to adapter events: {}", e)))?;

        info!("Starting BLE scan for {:?}", duration);
        adapter
            .start_scan(ScanFilter::default())
            .await
            .map_err(|e| Error::scan_failed(format!("cannot start scan: {}", e)))?;

        let deadline = Instant::now() + duration;
        let heard = collect_until(events, deadline, heard_peripheral).await;

        adapter
            .stop_scan()
            .await
            .map_err(|e| Error::scan_failed(format!("cannot stop scan: {}", e)))?;

        // Report only peripherals heard in this window, not the adapter's cache.
        let ids = first_seen(heard);
        let mut advertisements = Vec::with_capacity(ids.len());
        for peripheral_id in ids {
            let id = format_peripheral_id(&format!("{:?}", peripheral_id));
            let peripheral = match adapter.peripheral(&peripheral_id).await {
                Ok(p) => p,
                Err(e) => {
                    debug!("Peripheral {} disappeared: {}", id, e);
                    continue;
                }
            };
            match peripheral.properties().await {
                Ok(Some(props)) => advertisements.push(advertisement_from_properties(&id, &props)),
                Ok(None) => debug!("Peripheral {} has no properties, skipping", id),
                Err(e) => debug!("Error reading properties of {}: {}", id, e),
            }
        }

        info!("Scan complete. Heard {} device(s)", advertisements.len());
        Ok(advertisements)
    }
}

/// The peripheral an adapter event says was heard, if any.
fn heard_peripheral(event: CentralEvent) -> Option<PeripheralId> {
    match event {
        CentralEvent::DeviceDiscovered(id) | CentralEvent::DeviceUpdated(id) => Some(id),
        _ => None,
    }
}

/// Convert `btleplug` peripheral properties into a raw advertisement.
///
/// Advertisement payload goes into `metadata`; the platform peripheral ID
/// goes into `details`.
pub fn advertisement_from_properties(
    peripheral_id: &str,
    props: &PeripheralProperties,
) -> Advertisement {
    let address = create_identifier(&props.address.to_string(), peripheral_id);

    let mut metadata = Details::new();
    if !props.manufacturer_data.is_empty() {
        let data: Details = props
            .manufacturer_data
            .iter()
            .map(|(company, bytes)| (company.to_string(), Value::from(to_hex(bytes))))
            .collect();
        metadata.insert("manufacturer_data".into(), Value::Object(data));
    }
    if !props.service_data.is_empty() {
        let data: Details = props
            .service_data
            .iter()
            .map(|(uuid, bytes)| (uuid.to_string(), Value::from(to_hex(bytes))))
            .collect();
        metadata.insert("service_data".into(), Value::Object(data));
    }
    if !props.services.is_empty() {
        let services = props.services.iter().map(|u| Value::from(u.to_string()));
        metadata.insert("services".into(), Value::Array(services.collect()));
    }
    if let Some(tx_power) = props.tx_power_level {
        metadata.insert("tx_power_level".into(), Value::from(tx_power));
    }
    if let Some(address_type) = &props.address_type {
        metadata.insert(
            "address_type".into(),
            Value::from(format!("{:?}", address_type).to_lowercase()),
        );
    }
    if let Some(class) = props.class {
        metadata.insert("class".into(), Value::from(class));
    }

    let mut details = Details::new();
    details.insert("peripheral_id".into(), Value::from(peripheral_id));

    Advertisement {
        address,
        name: props.local_name.clone(),
        rssi: props.rssi,
        metadata: Some(metadata),
        details: Some(details),
    }
}
