// src/core/reporter.rs

use anyhow::{Context, Result};

use tracing::{debug, info};

use super::battery::{BatteryBackend, BatteryError, ChargeSample, SysfsBackend};
use super::block::{self, StatusBlock};
use super::config::Config;

// Outcome of one invocation, before it is mapped to an exit code
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Report {
    // Normal display, exit 0
    Status(StatusBlock),
    // Battery critically low and not charging, exit 33. The bar gets the
    // fallback block on this branch, not the computed display; existing
    // bar setups key on that exact pair.
    UrgentLow,
}

// Drives the read -> parse -> classify -> format pipeline once
pub struct StatusReporter {
    config: Config,
    backend: Box<dyn BatteryBackend>,
}

impl StatusReporter {
    // Loads configuration and resolves the battery device
    pub fn new() -> Result<Self> {
        let config = Config::load().context("Loading application configuration")?;
        let backend = SysfsBackend::new(&config.battery)?;
        info!("StatusReporter initialised");

        Ok(StatusReporter {
            config,
            backend: Box::new(backend),
        })
    }

    // Construct against any backend; used by tests and alternate data sources
    pub fn with_backend(config: Config, backend: Box<dyn BatteryBackend>) -> Self {
        StatusReporter { config, backend }
    }

    pub fn report(&self) -> Result<Report, BatteryError> {
        let reading = self.backend.read()?;
        let sample = ChargeSample::parse(&reading)?;

        let percent = sample.percent();
        let charging = reading.is_charging();
        debug!(percent, charging, status = %reading.status, "Computed charge state");

        // Low charge only counts as urgent while nothing is feeding the
        // battery; both conditions must hold.
        if percent < self.config.urgency.threshold_percent && !charging {
            info!(percent, "Battery critically low and not charging");
            return Ok(Report::UrgentLow);
        }

        Ok(Report::Status(block::render(
            charging,
            percent,
            &self.config.colors,
        )))
    }
}
