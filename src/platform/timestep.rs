//! Fixed timestep accumulator
//!
//! Turns variable frame deltas into a whole number of simulation ticks.

use crate::consts::{MAX_SUBSTEPS, SIM_DT};
use crate::sim::{ControlFlags, SignSource, SimulationEngine, Snapshot};

/// Longest frame delta accepted, in seconds
pub const MAX_FRAME_DT: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct FixedTimestep {
    tick_dt: f32,
    max_substeps: u32,
    accumulator: f32,
    /// One-shots sampled on frames where no tick was due
    pending_pause: bool,
    pending_reset: bool,
    ticks_run: u64,
}

impl Default for FixedTimestep {
    fn default() -> Self {
        Self::new(SIM_DT, MAX_SUBSTEPS)
    }
}

impl FixedTimestep {
    /// # Panics
    ///
    /// Panics if `tick_dt` is not positive or `max_substeps` is zero.
    pub fn new(tick_dt: f32, max_substeps: u32) -> Self {
        assert!(tick_dt > 0.0, "tick_dt must be positive");
        assert!(max_substeps > 0, "max_substeps must be positive");
        Self {
            tick_dt,
            max_substeps,
            accumulator: 0.0,
            pending_pause: false,
            pending_reset: false,
            ticks_run: 0,
        }
    }

    pub fn from_hz(tick_hz: u32, max_substeps: u32) -> Self {
        Self::new(1.0 / tick_hz.max(1) as f32, max_substeps)
    }

    pub fn tick_dt(&self) -> f32 {
        self.tick_dt
    }

    /// Ticks stepped through `run_frame` so far, paused ticks included
    pub fn ticks_run(&self) -> u64 {
        self.ticks_run
    }

    /// Add a frame's elapsed time and return how many ticks are due now
    pub fn ticks_due(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut ticks = 0;
        while self.accumulator >= self.tick_dt && ticks < self.max_substeps {
            self.accumulator -= self.tick_dt;
            ticks += 1;
        }

        if ticks == self.max_substeps && self.accumulator >= self.tick_dt {
            log::debug!("Dropping {:.3}s of simulation backlog", self.accumulator);
            self.accumulator %= self.tick_dt;
        }
        ticks
    }

    /// Run every due tick on `engine` and return the last snapshot, if any ran.
    ///
    /// One-shot commands in `input` reach the first tick that runs. If no tick
    /// is due this frame they are held until one is; a second pause toggle
    /// arriving before then cancels the first.
    pub fn run_frame<S: SignSource>(
        &mut self,
        engine: &mut SimulationEngine<S>,
        mut input: ControlFlags,
        frame_dt: f32,
    ) -> Option<Snapshot> {
        self.pending_pause ^= input.toggle_pause;
        self.pending_reset |= input.reset_scores;

        let due = self.ticks_due(frame_dt);
        if due == 0 {
            return None;
        }

        input.toggle_pause = std::mem::take(&mut self.pending_pause);
        input.reset_scores = std::mem::take(&mut self.pending_reset);

        let mut last = None;
        for _ in 0..due {
            last = Some(engine.step(&input, self.tick_dt));
            input.toggle_pause = false;
            input.reset_scores = false;
        }
        self.ticks_run += u64::from(due);
        last
    }
}
