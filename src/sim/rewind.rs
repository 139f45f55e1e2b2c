//! Rewind playback state machine
//!
//! A collision copies the snapshot history into a session and plays it back
//! newest to oldest, two recorded ticks per playback tick. When the cursor runs
//! past the oldest snapshot the controller goes idle and the history is cleared,
//! so live play records a fresh window from the restored point.

use super::history::Snapshot;
use super::state::GameState;
use crate::consts::REWIND_STRIDE;

/// Snapshots being replayed and the position of the next one
#[derive(Debug, Clone, PartialEq)]
pub struct RewindSession {
    snapshots: Vec<Snapshot>,
    /// Next index to apply; `None` once playback has passed index 0
    cursor: Option<usize>,
}

impl RewindSession {
    /// Start at the newest snapshot. Returns `None` for an empty list.
    pub fn new(snapshots: Vec<Snapshot>) -> Option<Self> {
        let cursor = snapshots.len().checked_sub(1)?;
        Some(Self {
            snapshots,
            cursor: Some(cursor),
        })
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Take the snapshot under the cursor and move the cursor back
    pub fn advance(&mut self) -> Option<(usize, &Snapshot)> {
        let index = self.cursor?;
        self.cursor = index.checked_sub(REWIND_STRIDE);
        self.snapshots.get(index).map(|snapshot| (index, snapshot))
    }
}

/// Idle while live play runs, Rewinding while a session plays back
#[derive(Debug, Clone, Default, PartialEq)]
pub enum RewindController {
    #[default]
    Idle,
    Rewinding(RewindSession),
}

impl RewindController {
    pub fn is_active(&self) -> bool {
        matches!(self, RewindController::Rewinding(_))
    }

    pub fn session(&self) -> Option<&RewindSession> {
        match self {
            RewindController::Rewinding(session) => Some(session),
            RewindController::Idle => None,
        }
    }
}

/// Outcome of one rewinding tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RewindStep {
    /// Live state was overwritten from the snapshot at this index
    Applied { index: usize },
    /// Playback ended; live simulation resumes next tick
    Finished,
}

/// Begin a rewind from the current history.
///
/// Returns the number of snapshots in the session, or `None` when the history
/// is empty, in which case nothing changes.
pub fn start_rewind(state: &mut GameState) -> Option<usize> {
    if state.rewind.is_active() {
        return None;
    }
    let session = RewindSession::new(state.history.snapshot_all())?;
    let len = session.len();
    log::debug!("Rewind started at tick {} ({len} snapshots)", state.time_ticks);
    state.rewind = RewindController::Rewinding(session);
    Some(len)
}

/// Play back one rewind tick. Does nothing when idle.
pub fn step_rewind(state: &mut GameState) -> Option<RewindStep> {
    let RewindController::Rewinding(session) = &mut state.rewind else {
        return None;
    };

    match session.advance() {
        Some((index, snapshot)) => {
            snapshot.restore(&mut state.player, &mut state.obstacles, &mut state.score);
            Some(RewindStep::Applied { index })
        }
        None => {
            state.rewind = RewindController::Idle;
            state.history.clear();
            log::debug!(
                "Rewind finished at tick {}, score {}",
                state.time_ticks,
                state.score
            );
            Some(RewindStep::Finished)
        }
    }
}
