// tests/sysfs_backend.rs

use batblock::core::battery::{BatteryBackend, BatteryError, ChargeSample, SysfsBackend};
use std::fs;
use tempfile::TempDir;

#[test]
fn sysfs_reading_parses_to_a_percentage() {
    let td = TempDir::new().unwrap();
    let bat_dir = td.path().join("BAT0");
    fs::create_dir_all(&bat_dir).unwrap();
    fs::write(bat_dir.join("type"), "Battery\n").unwrap();
    fs::write(bat_dir.join("status"), "Discharging\n").unwrap();
    fs::write(bat_dir.join("charge_full"), "3000000\n").unwrap();
    fs::write(bat_dir.join("charge_now"), "2250000\n").unwrap();

    let backend = SysfsBackend::with_path(bat_dir);
    let reading = backend.read().unwrap();
    let sample = ChargeSample::parse(&reading).unwrap();

    assert_eq!(sample.percent(), 75);
    assert_eq!(reading.status, "Discharging");
}

#[test]
fn missing_battery_directory_is_an_io_error() {
    let td = TempDir::new().unwrap();

    let backend = SysfsBackend::with_path(td.path().join("BAT9"));
    let err = backend.read().unwrap_err();

    assert!(matches!(err, BatteryError::Io { .. }));
    // The diagnostic names the file that could not be read
    assert!(err.to_string().starts_with("Failed to read"));
}
