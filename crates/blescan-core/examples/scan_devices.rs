//! Example: Scanning for BLE Devices
//!
//! Listens for advertisements for ten seconds and prints every device heard,
//! including its advertisement metadata.
//!
//! Run with: `cargo run --example scan_devices`

use blescan_core::{ScanOptions, platform_discoverer, scan};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    println!("Scanning for BLE devices...");
    println!();

    let discoverer = platform_discoverer();
    let records = scan::scan(&discoverer, &ScanOptions::from_secs_f64(10.0)?).await?;

    if records.is_empty() {
        println!("No devices found.");
        println!();
        println!("Make sure:");
        println!("  - Bluetooth is enabled on this computer");
        println!("  - Nearby devices are advertising");
    } else {
        println!("Found {} device(s):", records.len());
        println!();

        for record in &records {
            let name = if record.has_name() {
                record.name.as_str()
            } else {
                "Unknown"
            };
            let rssi = record
                .rssi
                .map(|r| format!("{} dBm", r))
                .unwrap_or_else(|| "N/A".to_string());

            println!("  {}", name);
            println!("    Address: {}", record.address);
            println!("    RSSI: {}", rssi);
            for (key, value) in &record.details {
                println!("    {}: {}", key, value);
            }
            println!();
        }
    }

    Ok(())
}
