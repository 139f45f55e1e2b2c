//! Collision detection between the player and obstacles
//!
//! Plain axis-aligned boxes. Two boxes collide only when their intersection has
//! positive area; boxes that merely share an edge or a corner do not.

use glam::Vec2;

use super::state::{Obstacle, Player};

/// Axis-aligned bounding box (top-left origin, y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, size: Vec2) -> Self {
        Self { min, size }
    }

    #[inline]
    pub fn max(&self) -> Vec2 {
        self.min + self.size
    }

    /// True when the two boxes overlap with non-zero area
    pub fn intersects(&self, other: &Aabb) -> bool {
        let a_max = self.max();
        let b_max = other.max();
        self.min.x < b_max.x
            && other.min.x < a_max.x
            && self.min.y < b_max.y
            && other.min.y < a_max.y
    }
}

/// Check the player against every obstacle, stopping at the first hit
pub fn collides(player: &Player, obstacles: &[Obstacle]) -> bool {
    let player_rect = player.rect();
    obstacles
        .iter()
        .any(|obstacle| player_rect.intersects(&obstacle.rect()))
}
