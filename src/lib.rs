//! Time Loop Runner - an endless runner where collisions rewind time
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, history, rewind)
//! - `renderer`: CPU-side shape tessellation for a frame
//! - `hud`: On-screen text for score, rewind indicator and instructions
//! - `settings`: Runner configuration loaded from JSON
//! - `error`: Crate error type

pub mod error;
pub mod hud;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use error::{Error, Result, RuleCode};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Play field dimensions
    pub const SCREEN_WIDTH: f32 = 1000.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Ground line (player and ground obstacles rest on it)
    pub const GROUND_Y: f32 = SCREEN_HEIGHT - 100.0;

    /// Default fixed tick rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Seconds of history available to a rewind
    pub const REWIND_SECONDS: u32 = 3;

    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.8;
    /// Vertical velocity applied by a jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -15.0;

    /// Player defaults
    pub const PLAYER_RADIUS: f32 = 20.0;
    pub const PLAYER_START_X: f32 = 100.0;
    pub const PLAYER_START_Y: f32 = SCREEN_HEIGHT - 140.0;

    /// Leftward obstacle speed per tick
    pub const OBSTACLE_SPEED: f32 = 5.0;
    /// Ground obstacle size (base sits on the ground line)
    pub const GROUND_OBSTACLE_WIDTH: f32 = 30.0;
    pub const GROUND_OBSTACLE_HEIGHT: f32 = 60.0;
    /// Floating obstacle size and height of its top edge above the ground
    pub const FLOATING_OBSTACLE_WIDTH: f32 = 40.0;
    pub const FLOATING_OBSTACLE_HEIGHT: f32 = 30.0;
    pub const FLOATING_OBSTACLE_ELEVATION: f32 = 150.0;

    /// Ticks between spawns at the start of a run
    pub const INITIAL_SPAWN_INTERVAL: u32 = 120;
    /// Spawn interval never drops below this
    pub const MIN_SPAWN_INTERVAL: u32 = 60;
    /// Chance that a spawn is a ground obstacle
    pub const GROUND_OBSTACLE_CHANCE: f64 = 0.7;

    /// Snapshots skipped per rewind tick (plays back at double speed)
    pub const REWIND_STRIDE: usize = 2;

    /// Instructions stay on screen until the score reaches this
    pub const INSTRUCTIONS_SCORE_LIMIT: u64 = 100;
}
