//! Frame assembly
//!
//! Turns a `RenderView` into one triangle list, back to front: background,
//! ground band, obstacles, player.

use glam::Vec2;

use super::shapes;
use super::vertex::{Vertex, as_bytes, colors};
use crate::consts::{GROUND_Y, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::hud::{self, HudText};
use crate::sim::RenderView;

/// Segments used for the player circle
const PLAYER_SEGMENTS: u32 = 24;

/// Everything needed to draw one frame
#[derive(Debug, Clone, Default)]
pub struct Frame {
    pub vertices: Vec<Vertex>,
    pub hud: Vec<HudText>,
}

impl Frame {
    /// Vertex data ready for upload
    pub fn vertex_bytes(&self) -> &[u8] {
        as_bytes(&self.vertices)
    }
}

/// Build the frame for the current view
pub fn build_frame(view: &RenderView<'_>) -> Frame {
    let mut vertices =
        Vec::with_capacity(12 + view.obstacles.len() * 6 + PLAYER_SEGMENTS as usize * 3);

    vertices.extend(shapes::rect(
        Vec2::ZERO,
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        colors::BACKGROUND,
    ));
    vertices.extend(shapes::rect(
        Vec2::new(0.0, GROUND_Y),
        Vec2::new(SCREEN_WIDTH, SCREEN_HEIGHT - GROUND_Y),
        colors::GROUND,
    ));

    for obstacle in view.obstacles {
        vertices.extend(shapes::rect(
            obstacle.pos,
            Vec2::new(obstacle.width, obstacle.height),
            colors::OBSTACLE,
        ));
    }

    vertices.extend(shapes::circle(
        view.player.center(),
        view.player.radius,
        colors::PLAYER,
        PLAYER_SEGMENTS,
    ));

    Frame {
        vertices,
        hud: hud::hud_lines(view),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{GameState, Obstacle};

    #[test]
    fn test_frame_vertex_counts() {
        let mut state = GameState::new(1, 180);
        let frame = build_frame(&state.view());
        assert_eq!(frame.vertices.len(), 12 + 72);

        state
            .obstacles
            .push(Obstacle::new(Vec2::new(500.0, 440.0), 30.0, 60.0));
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(800.0, 350.0), 40.0, 30.0));
        let frame = build_frame(&state.view());
        assert_eq!(frame.vertices.len(), 12 + 12 + 72);
        assert_eq!(frame.vertex_bytes().len(), frame.vertices.len() * 24);
    }

    #[test]
    fn test_player_drawn_last_around_center() {
        let state = GameState::new(1, 180);
        let frame = build_frame(&state.view());
        let last = frame.vertices.last().unwrap();
        assert_eq!(last.color, colors::PLAYER);
        // First vertex of each player triangle is the circle center
        let center = frame.vertices[frame.vertices.len() - 3];
        assert_eq!(center.position, [120.0, 480.0]);
    }
}
