//! Game state and core simulation types
//!
//! `GameState` is the one context object that owns everything a tick mutates.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;
use serde::Serialize;

use super::collision::Aabb;
use super::history::SnapshotHistory;
use super::rewind::RewindController;
use super::spawner::Spawner;
use crate::consts::*;
use crate::error::{Error, Result, RuleCode};

/// Current phase of the run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Live play (including rewind playback)
    Running,
    /// Run ended. Collisions rewind instead of ending the run, so nothing in
    /// the tick enters this phase; restart input is only honored here.
    GameOver,
}

/// The player character
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    /// Top-left corner of the bounding square
    pub pos: Vec2,
    pub vel_y: f32,
    pub radius: f32,
    /// Derived each update from position vs. the ground line
    pub on_ground: bool,
    pub ground_y: f32,
}

impl Default for Player {
    fn default() -> Self {
        Self::new(Vec2::new(PLAYER_START_X, PLAYER_START_Y))
    }
}

impl Player {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            vel_y: 0.0,
            radius: PLAYER_RADIUS,
            on_ground: false,
            ground_y: GROUND_Y,
        }
    }

    /// Lowest y the top edge may reach
    #[inline]
    pub fn rest_y(&self) -> f32 {
        self.ground_y - self.radius * 2.0
    }

    /// Apply gravity, integrate, and clamp to the ground line
    pub fn update(&mut self) {
        self.vel_y += GRAVITY;
        self.pos.y += self.vel_y;

        let rest_y = self.rest_y();
        if self.pos.y >= rest_y {
            self.pos.y = rest_y;
            self.vel_y = 0.0;
            self.on_ground = true;
        } else {
            self.on_ground = false;
        }
    }

    /// Jump if standing on the ground. Returns whether the jump happened.
    pub fn jump(&mut self) -> bool {
        if self.on_ground {
            self.vel_y = JUMP_STRENGTH;
            true
        } else {
            false
        }
    }

    /// Collision box (square of side 2 * radius)
    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::splat(self.radius * 2.0))
    }

    /// Center of the drawn circle
    pub fn center(&self) -> Vec2 {
        self.pos + Vec2::splat(self.radius)
    }
}

/// The two obstacle shapes the spawner produces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObstacleKind {
    /// Tall block standing on the ground line
    Ground,
    /// Short block hanging in the jump arc
    Floating,
}

impl ObstacleKind {
    pub fn size(&self) -> Vec2 {
        match self {
            ObstacleKind::Ground => Vec2::new(GROUND_OBSTACLE_WIDTH, GROUND_OBSTACLE_HEIGHT),
            ObstacleKind::Floating => Vec2::new(FLOATING_OBSTACLE_WIDTH, FLOATING_OBSTACLE_HEIGHT),
        }
    }

    /// Top edge y for a fresh spawn
    pub fn spawn_y(&self) -> f32 {
        match self {
            ObstacleKind::Ground => GROUND_Y - GROUND_OBSTACLE_HEIGHT,
            ObstacleKind::Floating => GROUND_Y - FLOATING_OBSTACLE_ELEVATION,
        }
    }
}

/// An obstacle scrolling right to left
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Obstacle {
    /// Top-left corner
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Obstacle {
    pub fn new(pos: Vec2, width: f32, height: f32) -> Self {
        Self {
            pos,
            width,
            height,
            speed: OBSTACLE_SPEED,
        }
    }

    /// Fresh obstacle of the given kind at the right edge of the field
    pub fn spawn(kind: ObstacleKind) -> Self {
        let size = kind.size();
        Self::new(Vec2::new(SCREEN_WIDTH, kind.spawn_y()), size.x, size.y)
    }

    /// Move left by the obstacle's speed
    pub fn update(&mut self) {
        self.pos.x -= self.speed;
    }

    /// Fully past the left edge; no longer collidable or drawable
    pub fn is_offscreen(&self) -> bool {
        self.pos.x < -self.width
    }

    pub fn rect(&self) -> Aabb {
        Aabb::new(self.pos, Vec2::new(self.width, self.height))
    }
}

/// Things that happened during a tick, for logging and feedback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jumped,
    ObstacleSpawned(ObstacleKind),
    /// Collision with history available; playback begins next tick
    RewindStarted { snapshots: usize },
    /// Collision before any history was recorded; play continues
    RewindSkipped,
    RewindFinished,
    Restarted,
}

/// Read-only view of what a renderer draws
#[derive(Debug, Clone, Copy, Serialize)]
pub struct RenderView<'a> {
    pub player: &'a Player,
    pub obstacles: &'a [Obstacle],
    pub score: u64,
    pub rewinding: bool,
}

/// Complete simulation context
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    /// Spawn RNG
    pub rng: Pcg32,
    pub phase: GamePhase,
    /// Ticks simulated since the run started (live and rewind)
    pub time_ticks: u64,
    /// Distance score
    pub score: u64,
    pub player: Player,
    /// Live obstacles, oldest spawn first
    pub obstacles: Vec<Obstacle>,
    pub history: SnapshotHistory,
    pub rewind: RewindController,
    pub spawner: Spawner,
}

impl GameState {
    /// Create a new run with the given seed and rewind history size
    pub fn new(seed: u64, history_capacity: usize) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            phase: GamePhase::Running,
            time_ticks: 0,
            score: 0,
            player: Player::default(),
            obstacles: Vec::new(),
            history: SnapshotHistory::new(history_capacity),
            rewind: RewindController::default(),
            spawner: Spawner::default(),
        }
    }

    /// Reset everything except the seed sequence and history size
    pub fn restart(&mut self) {
        self.player = Player::default();
        self.obstacles.clear();
        self.score = 0;
        self.phase = GamePhase::Running;
        self.history.clear();
        self.rewind = RewindController::default();
        self.spawner = Spawner::default();
    }

    pub fn is_rewinding(&self) -> bool {
        self.rewind.is_active()
    }

    /// Borrow the state a renderer needs
    pub fn view(&self) -> RenderView<'_> {
        RenderView {
            player: &self.player,
            obstacles: &self.obstacles,
            score: self.score,
            rewinding: self.is_rewinding(),
        }
    }

    /// Verify the invariants every tick must preserve
    pub fn check_invariants(&self) -> Result<()> {
        let violation = |rule| Error::InvariantViolation {
            tick: self.time_ticks,
            rule,
        };

        if !self.player.vel_y.is_finite() || !self.player.pos.is_finite() {
            return Err(violation(RuleCode::PlayerStateNotFinite));
        }
        if self.player.pos.y > self.player.rest_y() {
            return Err(violation(RuleCode::PlayerBelowGround));
        }
        if self.history.len() > self.history.capacity() {
            return Err(violation(RuleCode::HistoryOverCapacity));
        }
        if self.spawner.interval() < MIN_SPAWN_INTERVAL {
            return Err(violation(RuleCode::SpawnIntervalBelowFloor));
        }
        if self.obstacles.iter().any(Obstacle::is_offscreen) {
            return Err(violation(RuleCode::ObstacleOffscreen));
        }
        Ok(())
    }
}
