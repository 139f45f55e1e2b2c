//! Snapshot history for time rewind
//!
//! A fixed-capacity circular buffer. Once full, each append overwrites the
//! oldest slot in place, so steady-state recording never grows the buffer.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Obstacle fields captured by value
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObstacleRecord {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl From<&Obstacle> for ObstacleRecord {
    fn from(obstacle: &Obstacle) -> Self {
        Self {
            x: obstacle.pos.x,
            y: obstacle.pos.y,
            width: obstacle.width,
            height: obstacle.height,
        }
    }
}

impl ObstacleRecord {
    /// Build a fresh live obstacle from the record
    pub fn to_obstacle(&self) -> Obstacle {
        Obstacle::new(Vec2::new(self.x, self.y), self.width, self.height)
    }
}

/// State captured at one live tick
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub player_pos: Vec2,
    pub player_vel_y: f32,
    pub obstacles: Vec<ObstacleRecord>,
    pub score: u64,
}

impl Snapshot {
    pub fn capture(player: &Player, obstacles: &[Obstacle], score: u64) -> Self {
        Self {
            player_pos: player.pos,
            player_vel_y: player.vel_y,
            obstacles: obstacles.iter().map(ObstacleRecord::from).collect(),
            score,
        }
    }

    /// Overwrite live state with this snapshot. The obstacle list is rebuilt
    /// from the records; the grounded flag is left for the next update to derive.
    pub fn restore(&self, player: &mut Player, obstacles: &mut Vec<Obstacle>, score: &mut u64) {
        player.pos = self.player_pos;
        player.vel_y = self.player_vel_y;

        obstacles.clear();
        obstacles.extend(self.obstacles.iter().map(ObstacleRecord::to_obstacle));

        *score = self.score;
    }
}

/// Bounded history of snapshots, oldest evicted first
#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    slots: Vec<Snapshot>,
    /// Index of the oldest snapshot once the buffer has wrapped
    head: usize,
    capacity: usize,
}

impl SnapshotHistory {
    pub fn new(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            head: 0,
            capacity,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add a snapshot, evicting the oldest when full
    pub fn append(&mut self, snapshot: Snapshot) {
        if self.capacity == 0 {
            return;
        }
        if self.slots.len() < self.capacity {
            self.slots.push(snapshot);
        } else {
            self.slots[self.head] = snapshot;
            self.head = (self.head + 1) % self.capacity;
        }
    }

    /// Iterate oldest to newest
    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        let (newer, older) = self.slots.split_at(self.head);
        older.iter().chain(newer.iter())
    }

    /// Copy of the contents, oldest first
    pub fn snapshot_all(&self) -> Vec<Snapshot> {
        self.iter().cloned().collect()
    }

    pub fn newest(&self) -> Option<&Snapshot> {
        self.iter().last()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
        self.head = 0;
    }
}
