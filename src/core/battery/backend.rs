// src/core/battery/backend.rs

use std::path::PathBuf;

use thiserror::Error;

// Everything that can go wrong between the data source and a usable charge
// sample. The reporter maps every variant to the same fallback display and
// exit code; only the stderr diagnostic differs.
#[derive(Error, Debug)]
pub enum BatteryError {
    #[error("Failed to read {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not convert {field} value {value:?}")]
    Parse {
        field: &'static str,
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("Negative {field} value {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("Battery reports a full charge of {0}")]
    InvalidFullCharge(f64),

    #[error("No battery supply found under {}", .0.display())]
    NoBattery(PathBuf),
}

// Raw battery state as captured from the data source, once per invocation.
// Field contents are trimmed but otherwise untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryReading {
    pub status: String,
    pub charge_full_raw: String,
    pub charge_now_raw: String,
}

impl BatteryReading {
    // The kernel reports the exact string "Charging" while drawing from AC;
    // everything else ("Discharging", "Full", "Not charging", ...) counts
    // as not charging.
    pub fn is_charging(&self) -> bool {
        self.status == "Charging"
    }
}

// Numeric charge pair derived from a reading. Both values are non-negative
// and `charge_full` is strictly positive once `parse` has accepted them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChargeSample {
    pub charge_full: f64,
    pub charge_now: f64,
}

fn parse_capacity(field: &'static str, raw: &str) -> Result<f64, BatteryError> {
    let value = raw.parse::<f64>().map_err(|source| BatteryError::Parse {
        field,
        value: raw.to_string(),
        source,
    })?;
    if value < 0.0 {
        return Err(BatteryError::Negative { field, value });
    }
    Ok(value)
}

impl ChargeSample {
    pub fn parse(reading: &BatteryReading) -> Result<Self, BatteryError> {
        let charge_full = parse_capacity("full capacity", &reading.charge_full_raw)?;
        let charge_now = parse_capacity("current capacity", &reading.charge_now_raw)?;

        // A full capacity of zero would make the percentage meaningless;
        // treat it like any other unusable reading instead of dividing.
        if charge_full == 0.0 {
            return Err(BatteryError::InvalidFullCharge(charge_full));
        }

        Ok(ChargeSample {
            charge_full,
            charge_now,
        })
    }

    // Integer percentage, floored, clamped to 100; worn sensors can report
    // charge_now above the design capacity.
    pub fn percent(&self) -> u8 {
        let pct = (self.charge_now / self.charge_full * 100.0).floor();
        pct.min(100.0) as u8
    }
}

// Data-source seam: production reads sysfs, tests inject canned readings.
pub trait BatteryBackend {
    fn read(&self) -> Result<BatteryReading, BatteryError>;
}
