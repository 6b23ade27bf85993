//! Duo Pong - a two-player local Pong simulation core
//!
//! Core modules:
//! - `sim`: Deterministic fixed-tick simulation (physics, collisions, score, pause)
//! - `platform`: Host glue (keyboard latching, fixed timestep, threaded handoff)
//! - `hud`: Text and layout helpers derived from a snapshot
//! - `settings`: Host settings loaded from JSON

pub mod hud;
pub mod platform;
pub mod settings;
pub mod sim;

pub use settings::Settings;
pub use sim::{ControlFlags, SimulationEngine, Snapshot};

/// Game configuration constants, shared by the engine and any renderer
pub mod consts {
    /// Simulation rate
    pub const TICK_HZ: u32 = 60;
    /// Nominal duration of one tick in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_HZ as f32;
    /// Maximum ticks run per rendered frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Arena dimensions
    pub const ARENA_WIDTH: i32 = 800;
    pub const ARENA_HEIGHT: i32 = 500;

    /// Paddle geometry; x is fixed at `PADDLE_MARGIN` from each side wall
    pub const PADDLE_WIDTH: i32 = 12;
    pub const PADDLE_HEIGHT: i32 = 80;
    pub const PADDLE_SPEED: i32 = 6;
    pub const PADDLE_MARGIN: i32 = 20;
    /// Highest valid paddle top edge
    pub const PADDLE_MAX_Y: i32 = ARENA_HEIGHT - PADDLE_HEIGHT;

    /// Ball defaults
    pub const BALL_SIZE: i32 = 14;
    pub const SERVE_VX: i32 = 5;
    pub const SERVE_VY: i32 = 3;
    /// Per-axis speed cap
    pub const BALL_MAX_SPEED: i32 = 14;
    /// Hit offset from paddle center is divided by this to get `vy`
    pub const SPIN_DIVISOR: i32 = 7;
}
