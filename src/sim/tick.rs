//! Fixed timestep simulation tick
//!
//! Advances the game by exactly one tick. Velocities are in arena units per
//! tick, so `dt` never scales motion; it is only accumulated as play time.

use log::{debug, info};
use serde::{Deserialize, Serialize};

use super::collision::{Wall, bounce_off_paddle, paddle_contact, resolve_wall, scoring_side};
use super::rng::SignSource;
use super::state::{GamePhase, GameState, Side};
use crate::consts::*;

/// Input commands for a single tick
///
/// Movement flags are level-triggered (held keys). `toggle_pause` and
/// `reset_scores` are applied on every tick they are set, so hosts must
/// deliver them for a single tick per key press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ControlFlags {
    pub left_up: bool,
    pub left_down: bool,
    pub right_up: bool,
    pub right_down: bool,
    pub toggle_pause: bool,
    pub reset_scores: bool,
}

impl ControlFlags {
    /// -1 (up), 0 or +1 (down) for the given paddle. Opposing keys cancel.
    pub fn axis(&self, side: Side) -> i32 {
        let (up, down) = match side {
            Side::Left => (self.left_up, self.left_down),
            Side::Right => (self.right_up, self.right_down),
        };
        i32::from(down) - i32::from(up)
    }
}

/// What happened during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickEvents {
    /// Reset command was applied (nothing else ran this tick)
    pub scores_reset: bool,
    pub pause_changed: bool,
    pub wall_hit: Option<Wall>,
    pub paddle_hit: Option<Side>,
    pub scored: Option<Side>,
}

/// Advance the game state by one fixed tick
pub fn tick(
    state: &mut GameState,
    input: &ControlFlags,
    signs: &mut impl SignSource,
    dt: f32,
) -> TickEvents {
    let mut events = TickEvents::default();

    // Reset wins over everything, paused or not
    if input.reset_scores {
        state.score.clear();
        state.ball.serve(Side::Right, signs.next_sign());
        events.scores_reset = true;
        debug!("Scores reset, ball re-served");
        return events;
    }

    if input.toggle_pause {
        state.phase = state.phase.toggled();
        events.pause_changed = true;
        debug!("Phase -> {:?}", state.phase);
    }

    if state.phase == GamePhase::Paused {
        return events;
    }

    state.time_ticks += 1;
    state.play_time += dt;

    // Paddles
    state.left.shift(input.axis(Side::Left));
    state.right.shift(input.axis(Side::Right));

    // Ball
    state.ball.pos += state.ball.vel;
    events.wall_hit = resolve_wall(&mut state.ball);

    if let Some(side) = paddle_contact(state) {
        let paddle = *state.paddle(side);
        bounce_off_paddle(&mut state.ball, &paddle, || signs.next_sign());
        events.paddle_hit = Some(side);
    }

    if let Some(side) = scoring_side(&state.ball) {
        state.score.award(side);
        // Next serve heads toward the player who just scored
        state.ball.serve(side, signs.next_sign());
        events.scored = Some(side);
        info!(
            "{:?} scores ({} - {})",
            side, state.score.left, state.score.right
        );
    }

    state.ball.clamp_speed();
    enforce_invariants(state);

    events
}

/// Bounds that must hold after every running tick.
///
/// A violation is a bug in the tick ordering: loud in debug builds, clamped
/// away in release.
fn enforce_invariants(state: &mut GameState) {
    let ball = &state.ball;
    debug_assert!(state.left.in_bounds(), "left paddle out of bounds: {}", state.left.y);
    debug_assert!(state.right.in_bounds(), "right paddle out of bounds: {}", state.right.y);
    debug_assert!(ball.speed_in_bounds(), "ball too fast: {:?}", ball.vel);
    debug_assert!(
        (0..=ARENA_HEIGHT - ball.size).contains(&ball.pos.y),
        "ball left the arena vertically: {}",
        ball.pos.y
    );
    debug_assert!(
        (-ball.size..=ARENA_WIDTH + ball.size).contains(&ball.pos.x),
        "ball passed the goal line without scoring: {}",
        ball.pos.x
    );

    state.left.clamp();
    state.right.clamp();
    state.ball.clamp_speed();
    state.ball.pos.y = state.ball.pos.y.clamp(0, ARENA_HEIGHT - state.ball.size);
}
