//! End-to-end scan command tests against the mock discovery backend.
//!
//! Everything the binary prints on stdout goes through `run_scan`, so these
//! tests capture it in a buffer and check the exact output and exit code.

use blescan_cli::commands::{EXIT_SCAN_ERROR, ScanArgs, run_scan};
use blescan_core::{Advertisement, Details, MockDiscoverer};
use serde_json::{Value, json};

fn scan_args(timeout: f64, filter_name: Option<&str>, json: bool) -> ScanArgs {
    ScanArgs {
        timeout,
        filter_name: filter_name.map(str::to_string),
        json,
    }
}

async fn run(mock: &MockDiscoverer, args: &ScanArgs) -> (u8, String) {
    let mut out = Vec::new();
    let code = run_scan(mock, args, &mut out).await;
    (code, String::from_utf8(out).expect("stdout should be UTF-8"))
}

#[tokio::test]
async fn test_single_device_text_output() {
    let mock = MockDiscoverer::new(vec![
        Advertisement::new("11:22:33:44:55:66")
            .with_name("Widget")
            .with_rssi(-70),
    ]);

    let (code, stdout) = run(&mock, &scan_args(1.0, None, false)).await;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Scanning for BLE devices for 1.0 seconds...\n\
         Address: 11:22:33:44:55:66    Name: Widget                         RSSI: -70\n"
    );
}

#[tokio::test]
async fn test_empty_scan() {
    let mock = MockDiscoverer::default();

    let (code, stdout) = run(&mock, &scan_args(5.0, None, false)).await;

    assert_eq!(code, 0);
    assert_eq!(
        stdout,
        "Scanning for BLE devices for 5.0 seconds...\nNo devices found.\n"
    );
}

#[tokio::test]
async fn test_empty_scan_skips_json() {
    let mock = MockDiscoverer::default();

    let (code, stdout) = run(&mock, &scan_args(5.0, None, true)).await;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("No devices found.\n"));
    assert!(!stdout.contains('['));
}

#[tokio::test]
async fn test_filter_leaving_nothing_skips_json() {
    let mock = MockDiscoverer::new(vec![Advertisement::new("01").with_name("Light")]);

    let (code, stdout) = run(&mock, &scan_args(5.0, Some("sensor"), true)).await;

    assert_eq!(code, 0);
    assert!(stdout.ends_with("No devices found.\n"));
    assert!(!stdout.contains('['));
}

#[tokio::test]
async fn test_filter_by_name() {
    let mock = MockDiscoverer::new(vec![
        Advertisement::new("01:00:00:00:00:00")
            .with_name("TempSensor")
            .with_rssi(-50),
        Advertisement::new("02:00:00:00:00:00")
            .with_name("Light")
            .with_rssi(-60),
    ]);

    let (code, stdout) = run(&mock, &scan_args(5.0, Some("sensor"), false)).await;

    assert_eq!(code, 0);
    assert!(stdout.contains("TempSensor"));
    assert!(!stdout.contains("Light"));
    assert_eq!(stdout.lines().count(), 2);
}

#[tokio::test]
async fn test_json_follows_text_lines() {
    let mut metadata = Details::new();
    metadata.insert("services".into(), json!(["180f"]));
    let mock = MockDiscoverer::new(vec![
        Advertisement::new("AA:BB:CC:DD:EE:FF")
            .with_name("MySensor")
            .with_rssi(-61),
        Advertisement::new("11:22:33:44:55:66").with_metadata(metadata),
    ]);

    let (code, stdout) = run(&mock, &scan_args(5.0, None, true)).await;
    assert_eq!(code, 0);

    let mut lines = stdout.lines();
    assert!(lines.next().unwrap().starts_with("Scanning for BLE devices"));
    assert!(lines.next().unwrap().starts_with("Address: AA:BB:CC:DD:EE:FF"));
    let unnamed = lines.next().unwrap();
    assert!(unnamed.starts_with("Address: 11:22:33:44:55:66"));
    assert!(unnamed.ends_with("RSSI: None"));

    let json_text: String = lines.map(|l| format!("{}\n", l)).collect();
    assert!(json_text.starts_with("[\n  {\n"));
    let value: Value = serde_json::from_str(&json_text).unwrap();
    assert_eq!(
        value,
        json!([
            {"address": "AA:BB:CC:DD:EE:FF", "name": "MySensor", "rssi": -61, "details": {}},
            {"address": "11:22:33:44:55:66", "name": "", "rssi": null, "details": {"services": ["180f"]}}
        ])
    );
}

#[tokio::test]
async fn test_unavailable_capability() {
    let mock = MockDiscoverer::builder()
        .unavailable("no Bluetooth adapter available")
        .build();

    let (code, stdout) = run(&mock, &scan_args(5.0, None, true)).await;

    assert_eq!(code, EXIT_SCAN_ERROR);
    assert_eq!(
        stdout,
        "Error during scan: BLE unavailable: no Bluetooth adapter available\n"
    );
}

#[tokio::test]
async fn test_scan_failure_after_progress_line() {
    let mock = MockDiscoverer::builder()
        .advertisement(Advertisement::new("01").with_name("Lost"))
        .scan_error("cannot start scan: Permission Denied")
        .build();

    let (code, stdout) = run(&mock, &scan_args(5.0, None, false)).await;

    assert_eq!(code, EXIT_SCAN_ERROR);
    assert_eq!(
        stdout,
        "Scanning for BLE devices for 5.0 seconds...\n\
         Error during scan: Scan failed: cannot start scan: Permission Denied\n"
    );
}

#[tokio::test]
async fn test_output_is_repeatable() {
    let mock = MockDiscoverer::builder()
        .advertisements([
            Advertisement::new("01").with_name("A").with_rssi(-1),
            Advertisement::new("02").with_name("B"),
        ])
        .build();
    let args = scan_args(5.0, None, true);

    let (_, first) = run(&mock, &args).await;
    let (_, second) = run(&mock, &args).await;
    assert_eq!(first, second);
    assert_eq!(mock.scan_count(), 2);
}

#[tokio::test]
async fn test_rescan_reports_only_current_devices() {
    let mock = MockDiscoverer::builder()
        .advertisement(Advertisement::new("01").with_name("Gone"))
        .build();
    let args = scan_args(1.0, None, false);

    let (_, first) = run(&mock, &args).await;
    assert!(first.contains("Gone"));

    mock.set_advertisements(vec![Advertisement::new("02").with_name("Fresh")])
        .await;
    let (code, second) = run(&mock, &args).await;
    assert_eq!(code, 0);
    assert!(second.contains("Fresh"));
    assert!(!second.contains("Gone"));

    mock.set_advertisements(Vec::new()).await;
    let (_, third) = run(&mock, &args).await;
    assert!(third.ends_with("No devices found.\n"));
}
