//! Runner settings
//!
//! Loaded from an optional JSON file. Nothing is ever written back; runs do not
//! persist state.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{REWIND_SECONDS, TICK_RATE};
use crate::error::{Error, Result};

/// Largest rewind history accepted, in snapshots
pub const MAX_HISTORY_CAPACITY: usize = 1 << 20;

/// Runner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fixed simulation rate (ticks per second)
    pub tick_rate: u32,
    /// Seconds of history a rewind can replay
    pub rewind_seconds: u32,
    /// Run seed (random when absent)
    pub seed: Option<u64>,
    /// Let the built-in autopilot press jump
    pub autopilot: bool,
    /// Quit after this many ticks (runs until interrupted when absent)
    pub max_ticks: Option<u64>,
    /// Ticks between status log lines
    pub status_interval_ticks: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            rewind_seconds: REWIND_SECONDS,
            seed: None,
            autopilot: true,
            max_ticks: None,
            status_interval_ticks: TICK_RATE,
        }
    }
}

impl Settings {
    /// Load settings from a JSON file, or defaults when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            log::info!("Using default settings");
            return Ok(Self::default());
        };

        let json = fs::read_to_string(path).map_err(|source| Error::SettingsIo {
            path: path.to_path_buf(),
            source,
        })?;
        let settings = Self::from_json(&json).map_err(|source| Error::SettingsParse {
            path: path.to_path_buf(),
            source,
        })?;
        settings.validate()?;

        log::info!("Loaded settings from {}", path.display());
        Ok(settings)
    }

    /// Parse settings from a JSON string (missing fields take defaults)
    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Reject configurations the simulation cannot run with
    pub fn validate(&self) -> Result<()> {
        if self.tick_rate == 0 {
            return Err(Error::InvalidSettings("tick_rate must be positive"));
        }
        if self.rewind_seconds == 0 {
            return Err(Error::InvalidSettings("rewind_seconds must be positive"));
        }
        let capacity = self.tick_rate.checked_mul(self.rewind_seconds);
        if capacity.is_none_or(|capacity| capacity as usize > MAX_HISTORY_CAPACITY) {
            return Err(Error::InvalidSettings("rewind window is too large"));
        }
        Ok(())
    }

    /// Number of snapshots the rewind history holds
    pub fn history_capacity(&self) -> usize {
        self.tick_rate as usize * self.rewind_seconds as usize
    }

    /// Status line interval, never zero
    pub fn status_interval(&self) -> u64 {
        u64::from(self.status_interval_ticks.max(1))
    }
}
