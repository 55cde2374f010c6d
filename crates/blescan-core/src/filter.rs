//! Name filtering for discovered devices.

use crate::record::DeviceRecord;

/// Keep only records whose name contains `substring`, ignoring case.
///
/// An absent or empty substring returns the records unchanged. Records
/// without a name never match. Discovery order is preserved.
pub fn filter_by_name(records: Vec<DeviceRecord>, substring: Option<&str>) -> Vec<DeviceRecord> {
    let needle = match substring {
        Some(s) if !s.is_empty() => s.to_lowercase(),
        _ => return records,
    };

    records
        .into_iter()
        .filter(|r| name_matches(&r.name, &needle))
        .collect()
}

/// `needle` must already be lowercase.
fn name_matches(name: &str, needle: &str) -> bool {
    !name.is_empty() && name.to_lowercase().contains(needle)
}
