// src/core/battery/sysfs_backend.rs

use once_cell::sync::OnceCell;

use super::backend::{BatteryBackend, BatteryError, BatteryReading};
use crate::core::config::BatteryConfig;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

const POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

static SYSFS_BATTERY_PATH: OnceCell<PathBuf> = OnceCell::new();

// Reads battery info from Linux sysfs
pub struct SysfsBackend {
    path: PathBuf,
}

impl SysfsBackend {
    // Resolve the battery directory once per process: the configured device
    // name when set, otherwise the first `type == Battery` entry under
    // `/sys/class/power_supply`.
    pub fn new(cfg: &BatteryConfig) -> Result<Self, BatteryError> {
        let path = SYSFS_BATTERY_PATH
            .get_or_try_init(|| {
                Self::locate(Path::new(POWER_SUPPLY_ROOT), cfg.device.as_deref())
            })?
            .clone();

        Ok(Self { path })
    }

    fn locate(root: &Path, device: Option<&str>) -> Result<PathBuf, BatteryError> {
        // An explicitly configured entry is trusted; a wrong name surfaces
        // as an Io error on the first field read.
        if let Some(name) = device {
            let path = root.join(name);
            debug!(battery = %path.display(), "Using configured battery device");
            return Ok(path);
        }

        let entries = fs::read_dir(root).map_err(|source| BatteryError::Io {
            path: root.to_path_buf(),
            source,
        })?;
        for entry in entries {
            let entry = entry.map_err(|source| BatteryError::Io {
                path: root.to_path_buf(),
                source,
            })?;
            let type_file = entry.path().join("type");
            let typ = fs::read_to_string(&type_file).map_err(|source| BatteryError::Io {
                path: type_file,
                source,
            })?;
            if typ.trim() == "Battery" {
                debug!(battery = %entry.path().display(), "Discovered battery device");
                return Ok(entry.path());
            }
        }

        Err(BatteryError::NoBattery(root.to_path_buf()))
    }

    pub fn with_path(path: PathBuf) -> Self {
        SysfsBackend { path }
    }

    // Read a single pseudo-file under the battery directory, trimmed
    fn read_field(&self, name: &str) -> Result<String, BatteryError> {
        let path = self.path.join(name);
        let data = fs::read_to_string(&path).map_err(|source| BatteryError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(data.trim().to_string())
    }

    // `charge_*` is the native charge pair (µAh); some firmwares expose only
    // the `energy_*` pair (µWh). The percentage is a ratio, so either pair
    // works as long as the two files come from the same pair.
    fn read_charge_pair(&self) -> Result<(String, String), BatteryError> {
        match self.read_field("charge_full") {
            Ok(full) => Ok((full, self.read_field("charge_now")?)),
            Err(BatteryError::Io { ref source, .. }) if source.kind() == ErrorKind::NotFound => {
                warn!(
                    battery = %self.path.display(),
                    "charge_* files absent; falling back to energy_*"
                );
                Ok((
                    self.read_field("energy_full")?,
                    self.read_field("energy_now")?,
                ))
            }
            Err(e) => Err(e),
        }
    }
}

impl BatteryBackend for SysfsBackend {
    fn read(&self) -> Result<BatteryReading, BatteryError> {
        let status = self.read_field("status")?;
        let (charge_full_raw, charge_now_raw) = self.read_charge_pair()?;
        debug!(%status, %charge_full_raw, %charge_now_raw, "Read battery state from sysfs");

        Ok(BatteryReading {
            status,
            charge_full_raw,
            charge_now_raw,
        })
    }
}
