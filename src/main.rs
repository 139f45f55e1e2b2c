//! Time Loop Runner entry point
//!
//! Headless native runner: paces the simulation to the wall clock, feeds it
//! autopilot input, and logs what happens. An optional settings JSON path is
//! the only argument.

use std::path::PathBuf;
use std::process::ExitCode;
use std::thread;
use std::time::{Duration, Instant};

use time_loop_runner::hud;
use time_loop_runner::renderer::build_frame;
use time_loop_runner::sim::{GameEvent, GameState, TickInput, tick};
use time_loop_runner::{Result, Settings};

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    log::info!("Time Loop Runner (native) starting...");

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("Run aborted: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let settings_path = std::env::args_os().nth(1).map(PathBuf::from);
    let settings = Settings::load(settings_path.as_deref())?;

    let seed = settings.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed, settings.history_capacity());
    log::info!(
        "Game initialized with seed: {seed} ({} Hz, {} snapshot rewind window)",
        settings.tick_rate,
        settings.history_capacity()
    );
    if !settings.autopilot {
        log::warn!("Autopilot disabled and no input device attached - the runner will not jump");
    }

    let input = TickInput {
        autopilot: settings.autopilot,
        ..Default::default()
    };
    let tick_duration = Duration::from_secs_f64(1.0 / f64::from(settings.tick_rate));
    let status_interval = settings.status_interval();

    let mut ticks_run: u64 = 0;
    let mut next_tick = Instant::now();
    while settings.max_ticks.is_none_or(|max| ticks_run < max) {
        for event in tick(&mut state, &input) {
            log_event(&state, event);
        }
        ticks_run += 1;
        state.check_invariants()?;

        let frame = build_frame(&state.view());
        log::trace!(
            "Frame {ticks_run}: {} vertices ({} bytes), {} HUD lines",
            frame.vertices.len(),
            frame.vertex_bytes().len(),
            frame.hud.len()
        );

        if ticks_run % status_interval == 0 {
            log::info!("{}", hud::status_line(&state.view()));
        }

        // Hold the target rate; drop the backlog instead of bursting to catch up
        next_tick += tick_duration;
        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        } else {
            next_tick = now;
        }
    }

    log::info!("Quit after {ticks_run} ticks, final score {}", state.score);
    if log::log_enabled!(log::Level::Debug) {
        if let Ok(json) = serde_json::to_string(&state.view()) {
            log::debug!("Final state: {json}");
        }
    }
    Ok(())
}

fn log_event(state: &GameState, event: GameEvent) {
    match event {
        GameEvent::Jumped => log::debug!("Jump at tick {}", state.time_ticks),
        GameEvent::ObstacleSpawned(kind) => log::debug!(
            "Spawned {kind:?} obstacle (next in {} ticks)",
            state.spawner.interval()
        ),
        GameEvent::RewindStarted { snapshots } => log::info!(
            "Collision at score {} - rewinding {snapshots} snapshots",
            state.score
        ),
        GameEvent::RewindSkipped => log::warn!("Collision with no history to rewind into"),
        GameEvent::RewindFinished => {
            log::info!("Rewind complete, resuming at score {}", state.score)
        }
        GameEvent::Restarted => log::info!("Game restarted"),
    }
}
