//! Error types
//!
//! Ticks themselves never fail. Errors come from loading configuration or from
//! a state invariant check tripping, which aborts the run.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Simulation invariant that a state check can report as broken
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleCode {
    PlayerBelowGround,
    PlayerStateNotFinite,
    HistoryOverCapacity,
    SpawnIntervalBelowFloor,
    ObstacleOffscreen,
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::PlayerBelowGround => write!(f, "PLAYER_BELOW_GROUND"),
            Self::PlayerStateNotFinite => write!(f, "PLAYER_STATE_NOT_FINITE"),
            Self::HistoryOverCapacity => write!(f, "HISTORY_OVER_CAPACITY"),
            Self::SpawnIntervalBelowFloor => write!(f, "SPAWN_INTERVAL_BELOW_FLOOR"),
            Self::ObstacleOffscreen => write!(f, "OBSTACLE_OFFSCREEN"),
        }
    }
}

#[derive(Debug)]
pub enum Error {
    /// Settings file could not be read
    SettingsIo { path: PathBuf, source: io::Error },
    /// Settings file is not valid JSON for `Settings`
    SettingsParse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Settings parsed but describe an unusable configuration
    InvalidSettings(&'static str),
    /// A tick left the simulation in a state that breaks an invariant
    InvariantViolation { tick: u64, rule: RuleCode },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SettingsIo { path, source } => {
                write!(f, "failed to read settings {}: {source}", path.display())
            }
            Self::SettingsParse { path, source } => {
                write!(f, "failed to parse settings {}: {source}", path.display())
            }
            Self::InvalidSettings(reason) => write!(f, "invalid settings: {reason}"),
            Self::InvariantViolation { tick, rule } => {
                write!(f, "invariant {rule} violated at tick {tick}")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SettingsIo { source, .. } => Some(source),
            Self::SettingsParse { source, .. } => Some(source),
            Self::InvalidSettings(_) | Self::InvariantViolation { .. } => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
