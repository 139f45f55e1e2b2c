//! Attract-mode autopilot
//!
//! Presses jump when the nearest ground obstacle ahead enters a fixed window
//! in front of the player. Floating obstacles pass overhead of a grounded
//! player, so they never trigger a jump.

use super::state::GameState;

/// Closest gap (leading edge of player to obstacle) that still clears it
const JUMP_WINDOW_NEAR: f32 = 30.0;
/// Farthest gap at which a jump still lands past the obstacle
const JUMP_WINDOW_FAR: f32 = 70.0;

/// Whether the autopilot wants to jump this tick
pub fn wants_jump(state: &GameState) -> bool {
    let player = &state.player;
    if !player.on_ground {
        return false;
    }

    let leading_edge = player.pos.x + player.radius * 2.0;
    state
        .obstacles
        .iter()
        // Only obstacles whose bottom reaches below the grounded player's top need a jump
        .filter(|o| o.pos.y + o.height > player.rest_y())
        .map(|o| o.pos.x - leading_edge)
        .filter(|gap| *gap >= 0.0)
        .min_by(f32::total_cmp)
        .is_some_and(|gap| (JUMP_WINDOW_NEAR..=JUMP_WINDOW_FAR).contains(&gap))
}
