// src/core/battery/mod.rs

//! Battery readings and backends

pub mod backend;
pub mod sysfs_backend;

// Expose the reading types and the sysfs backend at the top level
pub use backend::{BatteryBackend, BatteryError, BatteryReading, ChargeSample};
pub use sysfs_backend::SysfsBackend;
