//! HUD text
//!
//! Score in the corner, a banner while rewinding, and instructions for the
//! first stretch of a run.

use glam::Vec2;

use crate::consts::{INSTRUCTIONS_SCORE_LIMIT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::renderer::vertex::colors;
use crate::sim::RenderView;

pub const REWIND_BANNER: &str = "REWINDING TIME...";
pub const INSTRUCTIONS: &str = "SPACE to Jump - Collisions rewind time!";

/// Where a line of text is placed relative to its position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A line of HUD text
#[derive(Debug, Clone, PartialEq)]
pub struct HudText {
    pub text: String,
    pub pos: Vec2,
    pub anchor: Anchor,
    pub color: [f32; 4],
}

/// Text to draw for the current view
pub fn hud_lines(view: &RenderView<'_>) -> Vec<HudText> {
    let mut lines = vec![HudText {
        text: format!("Score: {}", view.score),
        pos: Vec2::new(10.0, 10.0),
        anchor: Anchor::TopLeft,
        color: colors::TEXT,
    }];

    if view.rewinding {
        lines.push(HudText {
            text: REWIND_BANNER.to_string(),
            pos: Vec2::new(SCREEN_WIDTH / 2.0, 50.0),
            anchor: Anchor::Center,
            color: colors::REWIND_TEXT,
        });
    }

    if view.score < INSTRUCTIONS_SCORE_LIMIT {
        lines.push(HudText {
            text: INSTRUCTIONS.to_string(),
            pos: Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - 50.0),
            anchor: Anchor::Center,
            color: colors::TEXT,
        });
    }

    lines
}

/// One-line status for logs
pub fn status_line(view: &RenderView<'_>) -> String {
    let mut line = format!("Score: {} | obstacles: {}", view.score, view.obstacles.len());
    if view.rewinding {
        line.push_str(" | ");
        line.push_str(REWIND_BANNER);
    }
    line
}
