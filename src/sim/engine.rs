//! Owned simulation instance
//!
//! Bundles the game state with its sign source so hosts drive the game with
//! a single `step` call per tick and read back a [`Snapshot`].

use super::rng::{PcgSigns, SignSource};
use super::state::{GameState, Snapshot};
use super::tick::{ControlFlags, TickEvents, tick};

pub struct SimulationEngine<S: SignSource = PcgSigns> {
    state: GameState,
    signs: S,
    last_events: TickEvents,
}

impl SimulationEngine<PcgSigns> {
    /// Engine with a seeded PCG sign source
    pub fn new(seed: u64) -> Self {
        log::info!("Simulation engine created (seed {seed})");
        Self::with_signs(PcgSigns::new(seed))
    }
}

impl<S: SignSource> SimulationEngine<S> {
    pub fn with_signs(signs: S) -> Self {
        Self {
            state: GameState::new(),
            signs,
            last_events: TickEvents::default(),
        }
    }

    /// Advance exactly one tick and return the resulting snapshot.
    ///
    /// `dt_tick` only feeds the play-time counter; motion is per tick.
    pub fn step(&mut self, flags: &ControlFlags, dt_tick: f32) -> Snapshot {
        self.last_events = tick(&mut self.state, flags, &mut self.signs, dt_tick);
        self.state.snapshot()
    }

    pub fn snapshot(&self) -> Snapshot {
        self.state.snapshot()
    }

    /// Events produced by the most recent `step`
    pub fn last_events(&self) -> TickEvents {
        self.last_events
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct state access for tests and scripted setups
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn signs(&self) -> &S {
        &self.signs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::rng::ScriptedSigns;
    use crate::sim::state::Score;

    #[test]
    fn test_initial_snapshot() {
        let engine = SimulationEngine::new(1);
        let snap = engine.snapshot();
        assert_eq!(snap.left_paddle_y, 210);
        assert_eq!(snap.right_paddle_y, 210);
        assert_eq!((snap.ball_x, snap.ball_y, snap.ball_size), (393, 243, BALL_SIZE));
        assert_eq!((snap.left_score, snap.right_score), (0, 0));
        assert!(!snap.paused);
    }

    #[test]
    fn test_step_returns_updated_snapshot() {
        let mut engine = SimulationEngine::with_signs(ScriptedSigns::new([1]));
        let input = ControlFlags {
            right_down: true,
            ..Default::default()
        };
        let snap = engine.step(&input, SIM_DT);
        assert_eq!(snap.ball_x, 398);
        assert_eq!(snap.ball_y, 246);
        assert_eq!(snap.right_paddle_y, 210 + PADDLE_SPEED);
        assert_eq!(snap.time_ticks, 1);
        assert!((snap.play_time - SIM_DT).abs() < 1e-6);
        assert_eq!(snap, engine.snapshot());
    }

    #[test]
    fn test_reset_command_from_three_two() {
        let mut engine = SimulationEngine::with_signs(ScriptedSigns::new([1]));
        engine.state_mut().score = Score { left: 3, right: 2 };
        engine.state_mut().ball.pos = glam::IVec2::new(600, 100);

        let snap = engine.step(
            &ControlFlags {
                reset_scores: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!((snap.left_score, snap.right_score), (0, 0));
        assert_eq!((snap.ball_x, snap.ball_y), (393, 243));
        assert!(engine.last_events().scores_reset);
        assert_eq!(engine.signs().drawn(), 1);
    }

    #[test]
    fn test_paused_snapshot_is_stable() {
        let mut engine = SimulationEngine::new(9);
        let paused = engine.step(
            &ControlFlags {
                toggle_pause: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert!(paused.paused);
        for _ in 0..10 {
            assert_eq!(engine.step(&ControlFlags::default(), SIM_DT), paused);
        }
    }

    #[test]
    fn test_same_seed_same_match() {
        let mut a = SimulationEngine::new(2024);
        let mut b = SimulationEngine::new(2024);
        let input = ControlFlags {
            left_down: true,
            ..Default::default()
        };
        for _ in 0..2000 {
            assert_eq!(a.step(&input, SIM_DT), b.step(&input, SIM_DT));
        }
        assert_eq!(a.state(), b.state());
        assert!(a.state().score.left + a.state().score.right > 0);
    }
}
