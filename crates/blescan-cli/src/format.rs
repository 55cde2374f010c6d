//! Output formatting for scan results.

use anyhow::Result;
use blescan_core::DeviceRecord;

/// Printed instead of device lines when nothing was found.
pub const NO_DEVICES: &str = "No devices found.";

/// Render an optional RSSI the way it is printed in text lines.
pub fn format_rssi(rssi: Option<i16>) -> String {
    rssi.map_or_else(|| "None".to_string(), |r| r.to_string())
}

/// One text line per device.
///
/// Address is left-justified to 20 characters and name to 30. Longer values
/// are printed in full.
#[must_use]
pub fn format_device_line(record: &DeviceRecord) -> String {
    format!(
        "Address: {:<20} Name: {:<30} RSSI: {}",
        record.address,
        record.name,
        format_rssi(record.rssi)
    )
}

/// Text output for a whole scan, newline-terminated.
#[must_use]
pub fn format_scan_text(records: &[DeviceRecord]) -> String {
    if records.is_empty() {
        return format!("{}\n", NO_DEVICES);
    }

    records
        .iter()
        .map(|r| format_device_line(r) + "\n")
        .collect()
}

/// Pretty-printed JSON array (2-space indent), newline-terminated.
pub fn format_scan_json(records: &[DeviceRecord]) -> Result<String> {
    let json = serde_json::to_string_pretty(records)?;
    Ok(json + "\n")
}

/// Progress line printed before listening starts.
///
/// The timeout always prints with a fractional part (`5.0`, `1.5`).
#[must_use]
pub fn format_progress(timeout_secs: f64) -> String {
    format!("Scanning for BLE devices for {:?} seconds...", timeout_secs)
}
