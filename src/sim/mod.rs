//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One call to `tick` is one fixed tick, no wall-clock scaling
//! - Randomness only through an injected `SignSource`
//! - No rendering, input polling or platform dependencies

pub mod collision;
pub mod engine;
pub mod rng;
pub mod state;
pub mod tick;

pub use collision::{Rect, Wall};
pub use engine::SimulationEngine;
pub use rng::{PcgSigns, ScriptedSigns, SignSource};
pub use state::{Ball, GamePhase, GameState, Paddle, Score, Side, Snapshot};
pub use tick::{ControlFlags, TickEvents, tick};
