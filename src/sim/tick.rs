//! Fixed timestep simulation tick
//!
//! Core game loop that advances the simulation by one tick.

use super::autopilot;
use super::collision::collides;
use super::history::Snapshot;
use super::rewind::{RewindStep, start_rewind, step_rewind};
use super::spawner::spawn_tick;
use super::state::{GameEvent, GamePhase, GameState};

/// Input commands for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Jump pressed this tick (space)
    pub jump: bool,
    /// Restart requested (only honored after game over)
    pub restart: bool,
    /// Attract mode - the autopilot presses jump
    pub autopilot: bool,
}

/// Advance the game state by one fixed tick
pub fn tick(state: &mut GameState, input: &TickInput) -> Vec<GameEvent> {
    let mut events = Vec::new();

    if state.phase == GamePhase::GameOver {
        if input.restart {
            state.restart();
            events.push(GameEvent::Restarted);
        }
        return events;
    }

    state.time_ticks += 1;

    // Playback owns the whole tick; input is ignored
    if state.is_rewinding() {
        if let Some(RewindStep::Finished) = step_rewind(state) {
            events.push(GameEvent::RewindFinished);
        }
        return events;
    }

    let jump = input.jump || (input.autopilot && autopilot::wants_jump(state));
    if jump && state.player.jump() {
        events.push(GameEvent::Jumped);
    }

    state
        .history
        .append(Snapshot::capture(&state.player, &state.obstacles, state.score));

    state.player.update();

    for obstacle in state.obstacles.iter_mut() {
        obstacle.update();
    }
    state.obstacles.retain(|obstacle| !obstacle.is_offscreen());

    if let Some(kind) = spawn_tick(&mut state.spawner, &mut state.rng, &mut state.obstacles) {
        events.push(GameEvent::ObstacleSpawned(kind));
    }

    state.score += 1;

    if collides(&state.player, &state.obstacles) {
        match start_rewind(state) {
            Some(snapshots) => events.push(GameEvent::RewindStarted { snapshots }),
            None => events.push(GameEvent::RewindSkipped),
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::state::{Obstacle, Player};
    use glam::Vec2;

    fn idle() -> TickInput {
        TickInput::default()
    }

    fn jump() -> TickInput {
        TickInput {
            jump: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_live_tick_records_and_scores() {
        let mut state = GameState::new(12345, 180);
        for _ in 0..10 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.score, 10);
        assert_eq!(state.history.len(), 10);
        assert_eq!(state.time_ticks, 10);
        // Snapshots are taken before the score increments
        let scores: Vec<u64> = state.history.iter().map(|s| s.score).collect();
        assert_eq!(scores, (0..10).collect::<Vec<_>>());
    }

    #[test]
    fn test_history_capped_at_window() {
        let mut state = GameState::new(1, 180);
        // Autopilot keeps the run mostly collision free, but rewinds clear
        // history, so only check the bound
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..1_000 {
            tick(&mut state, &input);
            assert!(state.history.len() <= 180);
        }
    }

    #[test]
    fn test_first_spawn_on_tick_120() {
        let mut state = GameState::new(9, 180);
        let mut spawned_at = None;
        for t in 1..=120 {
            let events = tick(&mut state, &idle());
            if events.iter().any(|e| matches!(e, GameEvent::ObstacleSpawned(_))) {
                spawned_at = Some(t);
                break;
            }
        }
        assert_eq!(spawned_at, Some(120));
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 1000.0);
    }

    #[test]
    fn test_collision_rewinds_at_double_speed() {
        let mut state = GameState::new(7, 180);
        for _ in 0..10 {
            tick(&mut state, &idle());
        }
        // Obstacle already overlapping the grounded player
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(110.0, 440.0), 30.0, 60.0));

        let events = tick(&mut state, &idle());
        assert!(events.contains(&GameEvent::RewindStarted { snapshots: 11 }));
        assert!(state.is_rewinding());
        assert_eq!(state.score, 11);

        // Indices 10, 8, 6, 4, 2, 0 carry scores 10, 8, 6, 4, 2, 0
        let mut replayed_scores = Vec::new();
        for _ in 0..6 {
            let events = tick(&mut state, &jump());
            assert!(events.is_empty());
            replayed_scores.push(state.score);
        }
        assert_eq!(replayed_scores, vec![10, 8, 6, 4, 2, 0]);
        assert!(state.obstacles.is_empty());
        assert!(state.is_rewinding());

        let events = tick(&mut state, &idle());
        assert_eq!(events, vec![GameEvent::RewindFinished]);
        assert!(!state.is_rewinding());
        assert!(state.history.is_empty());

        // Live play resumes from the restored point
        tick(&mut state, &idle());
        assert_eq!(state.score, 1);
        assert_eq!(state.history.len(), 1);
    }

    #[test]
    fn test_spawner_frozen_during_rewind() {
        let mut state = GameState::new(7, 180);
        for _ in 0..50 {
            tick(&mut state, &idle());
        }
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(110.0, 440.0), 30.0, 60.0));
        let events = tick(&mut state, &idle());
        assert!(events.contains(&GameEvent::RewindStarted { snapshots: 51 }));

        let timer = state.spawner.timer();
        let interval = state.spawner.interval();
        assert_eq!(timer, 51);

        loop {
            let events = tick(&mut state, &idle());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::ObstacleSpawned(_))));
            assert_eq!(state.spawner.timer(), timer);
            assert_eq!(state.spawner.interval(), interval);
            if events.contains(&GameEvent::RewindFinished) {
                break;
            }
        }

        // Spawner state is not part of a snapshot, so it resumes where it stopped
        tick(&mut state, &idle());
        assert!(!state.is_rewinding());
        assert_eq!(state.spawner.timer(), timer + 1);
        assert_eq!(state.spawner.interval(), interval);
    }

    #[test]
    fn test_rewind_restores_obstacle_positions() {
        let mut state = GameState::new(7, 180);
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(400.0, 440.0), 30.0, 60.0));
        for _ in 0..4 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.obstacles[0].pos.x, 380.0);

        state
            .obstacles
            .push(Obstacle::new(Vec2::new(110.0, 440.0), 30.0, 60.0));
        tick(&mut state, &idle());
        assert!(state.is_rewinding());

        // Newest snapshot was taken at the start of the colliding tick
        tick(&mut state, &idle());
        assert_eq!(state.obstacles.len(), 2);
        assert_eq!(state.obstacles[0].pos.x, 380.0);
        assert_eq!(state.obstacles[1].pos.x, 110.0);

        // Then two recorded ticks back per playback tick
        tick(&mut state, &idle());
        assert_eq!(state.obstacles.len(), 1);
        assert_eq!(state.obstacles[0].pos.x, 390.0);
    }

    #[test]
    fn test_jump_ignored_while_rewinding() {
        let mut state = GameState::new(7, 180);
        for _ in 0..5 {
            tick(&mut state, &idle());
        }
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(110.0, 440.0), 30.0, 60.0));
        tick(&mut state, &idle());
        assert!(state.is_rewinding());

        let events = tick(&mut state, &jump());
        assert!(!events.contains(&GameEvent::Jumped));
        assert_eq!(state.player.vel_y, 0.0);
    }

    #[test]
    fn test_collision_without_history_keeps_running() {
        // Zero-capacity history: nothing is ever recorded to rewind into
        let mut state = GameState::new(7, 0);
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(110.0, 440.0), 30.0, 60.0));

        let events = tick(&mut state, &idle());
        assert!(events.contains(&GameEvent::RewindSkipped));
        assert!(!state.is_rewinding());
        assert_eq!(state.score, 1);

        tick(&mut state, &idle());
        assert_eq!(state.score, 2);
    }

    #[test]
    fn test_jump_clears_ground_obstacle() {
        let mut state = GameState::new(7, 180);
        tick(&mut state, &idle());
        assert!(state.player.on_ground);

        state
            .obstacles
            .push(Obstacle::new(Vec2::new(190.0, 440.0), 30.0, 60.0));
        let events = tick(&mut state, &jump());
        assert!(events.contains(&GameEvent::Jumped));

        for _ in 0..60 {
            let events = tick(&mut state, &idle());
            assert!(!events.iter().any(|e| matches!(e, GameEvent::RewindStarted { .. })));
        }
        assert!(state.player.on_ground);
    }

    #[test]
    fn test_autopilot_survives_ground_obstacle() {
        let mut state = GameState::new(7, 180);
        state
            .obstacles
            .push(Obstacle::new(Vec2::new(500.0, 440.0), 30.0, 60.0));
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        let mut jumped = false;
        for _ in 0..110 {
            let events = tick(&mut state, &input);
            jumped |= events.contains(&GameEvent::Jumped);
            assert!(!state.is_rewinding());
        }
        assert!(jumped);
    }

    #[test]
    fn test_restart_only_after_game_over() {
        let mut state = GameState::new(7, 180);
        for _ in 0..30 {
            tick(&mut state, &idle());
        }
        let restart = TickInput {
            restart: true,
            ..Default::default()
        };
        let events = tick(&mut state, &restart);
        assert!(!events.contains(&GameEvent::Restarted));
        assert_eq!(state.score, 31);

        state.phase = GamePhase::GameOver;
        tick(&mut state, &idle());
        assert_eq!(state.score, 31);

        let events = tick(&mut state, &restart);
        assert_eq!(events, vec![GameEvent::Restarted]);
        assert_eq!(state.score, 0);
        assert_eq!(state.player, Player::default());
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = GameState::new(99999, 180);
        let mut state2 = GameState::new(99999, 180);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };

        for _ in 0..2_000 {
            let e1 = tick(&mut state1, &input);
            let e2 = tick(&mut state2, &input);
            assert_eq!(e1, e2);
        }

        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.obstacles, state2.obstacles);
    }

    #[test]
    fn test_invariants_hold_over_long_run() {
        let mut state = GameState::new(2024, 180);
        let input = TickInput {
            autopilot: true,
            ..Default::default()
        };
        for _ in 0..20_000 {
            tick(&mut state, &input);
            assert!(state.check_invariants().is_ok());
        }
        assert_eq!(state.spawner.interval(), 60);
    }
}
