// tests/reporter.rs

use batblock::core::battery::{BatteryBackend, BatteryError, BatteryReading};
use batblock::core::block::StatusBlock;
use batblock::core::config::Config;
use batblock::core::reporter::{Report, StatusReporter};

// Canned readings instead of a live sysfs
struct FakeBackend {
    status: &'static str,
    charge_full: &'static str,
    charge_now: &'static str,
}

impl BatteryBackend for FakeBackend {
    fn read(&self) -> Result<BatteryReading, BatteryError> {
        Ok(BatteryReading {
            status: self.status.to_string(),
            charge_full_raw: self.charge_full.to_string(),
            charge_now_raw: self.charge_now.to_string(),
        })
    }
}

fn reporter(status: &'static str, full: &'static str, now: &'static str) -> StatusReporter {
    StatusReporter::with_backend(
        Config::default(),
        Box::new(FakeBackend {
            status,
            charge_full: full,
            charge_now: now,
        }),
    )
}

#[test]
fn discharging_at_seven_percent_is_urgent() {
    let report = reporter("Discharging", "1000", "70").report().unwrap();
    assert_eq!(report, Report::UrgentLow);
}

#[test]
fn urgent_report_maps_to_the_fallback_pair() {
    // The urgent branch deliberately shows the placeholder text, not the
    // computed display
    let report = reporter("Discharging", "1000", "70").report().unwrap();
    assert_eq!(report, Report::UrgentLow);

    let mut out = Vec::new();
    StatusBlock::fallback().write_to(&mut out).unwrap();
    assert_eq!(out, b"error\nerror\n");
}

#[test]
fn charging_at_five_percent_is_not_urgent() {
    let report = reporter("Charging", "1000", "50").report().unwrap();
    match report {
        Report::Status(block) => {
            // charging markup regardless of how low the charge is
            assert!(block.full_text.starts_with("<span foreground=\"#378c1a\">"));
            assert!(block.full_text.ends_with("   5%"));
        }
        other => panic!("expected a status display, got {other:?}"),
    }
}

#[test]
fn threshold_is_strict() {
    // Exactly at the threshold is not urgent; only below it is
    let report = reporter("Discharging", "1000", "80").report().unwrap();
    assert!(matches!(report, Report::Status(_)));
}

#[test]
fn only_the_exact_charging_literal_bypasses_urgency() {
    let report = reporter("Not charging", "1000", "70").report().unwrap();
    assert_eq!(report, Report::UrgentLow);
}

#[test]
fn healthy_discharge_is_uncolored() {
    let report = reporter("Discharging", "1000", "500").report().unwrap();
    match report {
        Report::Status(block) => {
            assert!(!block.full_text.contains("<span"));
            assert!(block.full_text.ends_with("  50%"));
            assert_eq!(block.short_text, block.full_text);
        }
        other => panic!("expected a status display, got {other:?}"),
    }
}

#[test]
fn sensor_overshoot_reads_as_full() {
    let report = reporter("Full", "1000", "1040").report().unwrap();
    match report {
        Report::Status(block) => assert!(block.full_text.ends_with(" 100%")),
        other => panic!("expected a status display, got {other:?}"),
    }
}

#[test]
fn malformed_capacity_is_a_parse_error() {
    let err = reporter("Discharging", "abc", "100").report().unwrap_err();
    assert!(matches!(err, BatteryError::Parse { .. }));
}

#[test]
fn zero_full_charge_is_rejected() {
    let err = reporter("Discharging", "0", "0").report().unwrap_err();
    assert!(matches!(err, BatteryError::InvalidFullCharge(_)));
}
