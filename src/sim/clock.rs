//! Fixed-timestep tick driver
//!
//! Folds variable wall-clock frames into whole 60 Hz simulation steps. The
//! clock keeps cadence in every phase; `tick` itself skips gameplay outside
//! `Playing`. Starting a run resets the accumulator, so at most one logical
//! loop exists and a restart takes effect at a tick boundary: no in-flight
//! step is ever interrupted mid-computation.

use super::state::GameState;
use super::tick::tick;
use crate::consts::{MAX_SUBSTEPS, SIM_DT};

/// Accumulator that drives fixed simulation steps from frame times
#[derive(Debug, Clone, Copy, Default)]
pub struct TickClock {
    accumulator: f32,
}

impl TickClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any partially accumulated frame time
    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }

    /// Fold `elapsed` seconds into fixed ticks; returns the substep count.
    ///
    /// Catch-up is bounded at `MAX_SUBSTEPS` per call, so a long stall
    /// resumes at real-time cadence instead of spiraling.
    pub fn advance(&mut self, state: &mut GameState, elapsed: f32) -> u32 {
        let elapsed = elapsed.min(MAX_SUBSTEPS as f32 * SIM_DT);
        self.accumulator += elapsed;

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            tick(state, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;
        }
        substeps
    }
}
