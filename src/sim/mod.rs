//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (obstacles in spawn order)
//! - No rendering or platform dependencies

pub mod autopilot;
pub mod collision;
pub mod history;
pub mod rewind;
pub mod spawner;
pub mod state;
pub mod tick;

pub use collision::{Aabb, collides};
pub use history::{ObstacleRecord, Snapshot, SnapshotHistory};
pub use rewind::{RewindController, RewindSession, RewindStep, start_rewind, step_rewind};
pub use spawner::Spawner;
pub use state::{GameEvent, GamePhase, GameState, Obstacle, ObstacleKind, Player, RenderView};
pub use tick::{TickInput, tick};
