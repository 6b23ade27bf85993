//! Keyboard latch
//!
//! Collects press/release events between ticks and produces one
//! [`ControlFlags`] per tick. Movement keys are reported while held; pause and
//! reset fire once per physical press, ignoring OS key repeat.

use crate::sim::ControlFlags;

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Left paddle up
    W,
    /// Left paddle down
    S,
    /// Right paddle up
    Up,
    /// Right paddle down
    Down,
    /// Pause toggle
    Space,
    /// Reset scores
    R,
}

impl Key {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "w" | "keyw" => Some(Key::W),
            "s" | "keys" => Some(Key::S),
            "up" | "arrowup" => Some(Key::Up),
            "down" | "arrowdown" => Some(Key::Down),
            "space" | " " => Some(Key::Space),
            "r" | "keyr" => Some(Key::R),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct KeyboardLatch {
    held: ControlFlags,
    space_down: bool,
    r_down: bool,
    pause_pending: bool,
    reset_pending: bool,
}

impl KeyboardLatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::W => self.held.left_up = true,
            Key::S => self.held.left_down = true,
            Key::Up => self.held.right_up = true,
            Key::Down => self.held.right_down = true,
            Key::Space => {
                if !self.space_down {
                    self.space_down = true;
                    // Two presses before the next tick cancel out
                    self.pause_pending = !self.pause_pending;
                }
            }
            Key::R => {
                if !self.r_down {
                    self.r_down = true;
                    self.reset_pending = true;
                }
            }
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::W => self.held.left_up = false,
            Key::S => self.held.left_down = false,
            Key::Up => self.held.right_up = false,
            Key::Down => self.held.right_down = false,
            Key::Space => self.space_down = false,
            Key::R => self.r_down = false,
        }
    }

    /// Release everything, e.g. when the window loses focus
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Flags for the next tick. One-shot commands are consumed.
    pub fn sample(&mut self) -> ControlFlags {
        let flags = ControlFlags {
            toggle_pause: self.pause_pending,
            reset_scores: self.reset_pending,
            ..self.held
        };
        self.pause_pending = false;
        self.reset_pending = false;
        flags
    }
}
