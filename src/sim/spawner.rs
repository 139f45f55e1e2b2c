//! Obstacle spawning and the difficulty ramp
//!
//! Every spawn shortens the interval to the next one by a tick, down to
//! `MIN_SPAWN_INTERVAL`.

use rand::Rng;

use super::state::{Obstacle, ObstacleKind};
use crate::consts::{GROUND_OBSTACLE_CHANCE, INITIAL_SPAWN_INTERVAL, MIN_SPAWN_INTERVAL};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spawner {
    /// Live ticks since the last spawn
    timer: u32,
    /// Ticks between spawns
    interval: u32,
}

impl Default for Spawner {
    fn default() -> Self {
        Self {
            timer: 0,
            interval: INITIAL_SPAWN_INTERVAL,
        }
    }
}

impl Spawner {
    pub fn timer(&self) -> u32 {
        self.timer
    }

    pub fn interval(&self) -> u32 {
        self.interval
    }

    /// Count one live tick. Returns the kind to spawn when the timer fires.
    pub fn tick<R: Rng>(&mut self, rng: &mut R) -> Option<ObstacleKind> {
        self.timer += 1;
        if self.timer < self.interval {
            return None;
        }

        self.timer = 0;
        if self.interval > MIN_SPAWN_INTERVAL {
            self.interval -= 1;
        }
        Some(choose_kind(rng))
    }
}

/// Pick ground or floating with the fixed ground-obstacle probability
pub fn choose_kind<R: Rng>(rng: &mut R) -> ObstacleKind {
    if rng.random::<f64>() < GROUND_OBSTACLE_CHANCE {
        ObstacleKind::Ground
    } else {
        ObstacleKind::Floating
    }
}

/// Run the spawner for one live tick, pushing any new obstacle
pub fn spawn_tick<R: Rng>(
    spawner: &mut Spawner,
    rng: &mut R,
    obstacles: &mut Vec<Obstacle>,
) -> Option<ObstacleKind> {
    let kind = spawner.tick(rng)?;
    obstacles.push(Obstacle::spawn(kind));
    Some(kind)
}
