//! Platform abstraction layer
//!
//! Host-side glue around the simulation:
//! - Keyboard events to per-tick control flags (with press edge detection)
//! - Frame time to fixed ticks
//! - Optional logic thread with input/snapshot handoff

pub mod handoff;
pub mod keyboard;
pub mod timestep;

pub use handoff::SimThread;
pub use keyboard::{Key, KeyboardLatch};
pub use timestep::FixedTimestep;
