//! Utility functions for blescan-core.

use std::collections::HashSet;
use std::hash::Hash;

use futures::{Stream, StreamExt};
use tokio::time::{Instant, timeout_at};

/// The address CoreBluetooth reports for every peripheral.
pub const HIDDEN_ADDRESS: &str = "00:00:00:00:00:00";

/// Format a peripheral ID's `Debug` output as a bare identifier.
///
/// On macOS peripheral IDs are UUIDs; on BlueZ they are D-Bus object paths.
/// Either way the useful part sits inside `PeripheralId(...)`.
pub fn format_peripheral_id(debug_repr: &str) -> String {
    debug_repr
        .trim_start_matches("PeripheralId(")
        .trim_end_matches(')')
        .to_string()
}

/// Pick the address to report for a peripheral.
///
/// Where the platform hides the MAC address, fall back to the peripheral ID.
pub fn create_identifier(address: &str, peripheral_id: &str) -> String {
    if address == HIDDEN_ADDRESS {
        peripheral_id.to_string()
    } else {
        address.to_string()
    }
}

/// Lowercase hex encoding of raw advertisement bytes.
pub fn to_hex(bytes: &[u8]) -> String {
    use std::fmt::Write;

    bytes.iter().fold(String::with_capacity(bytes.len() * 2), |mut s, b| {
        let _ = write!(s, "{:02x}", b);
        s
    })
}

/// Deduplicate `ids`, keeping the position of each one's first appearance.
pub fn first_seen<T, I>(ids: I) -> Vec<T>
where
    T: Eq + Hash + Clone,
    I: IntoIterator<Item = T>,
{
    let mut seen = HashSet::new();
    ids.into_iter().filter(|id| seen.insert(id.clone())).collect()
}

/// Pull items from `events` until `deadline` passes or the stream ends,
/// keeping whatever `heard` extracts from each one.
pub async fn collect_until<S, T, F>(mut events: S, deadline: Instant, mut heard: F) -> Vec<T>
where
    S: Stream + Unpin,
    F: FnMut(S::Item) -> Option<T>,
{
    let mut collected = Vec::new();
    while let Ok(Some(event)) = timeout_at(deadline, events.next()).await {
        collected.extend(heard(event));
    }
    collected
}
