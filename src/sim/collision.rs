//! Collision detection and response for axis-aligned boxes
//!
//! Ball and paddles are both treated as rectangles. Overlap is strict:
//! boxes that only share an edge do not collide.

use super::state::{Ball, GameState, Paddle, Side};
use crate::consts::*;

/// Axis-aligned rectangle in arena units (top-left origin, y grows down)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    /// True if the interiors overlap. Empty rectangles never intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.w <= 0 || self.h <= 0 || other.w <= 0 || other.h <= 0 {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

/// Which wall the ball bounced off
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wall {
    Top,
    Bottom,
}

/// Resolve at most one top/bottom wall contact: clamp inside, flip `vy`
pub fn resolve_wall(ball: &mut Ball) -> Option<Wall> {
    if ball.pos.y <= 0 {
        ball.pos.y = 0;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Top)
    } else if ball.pos.y + ball.size >= ARENA_HEIGHT {
        ball.pos.y = ARENA_HEIGHT - ball.size;
        ball.vel.y = -ball.vel.y;
        Some(Wall::Bottom)
    } else {
        None
    }
}

/// Vertical speed from where the ball struck the paddle
///
/// Truncating division, so hits near the middle come out as 0 and are left
/// for the caller to nudge.
pub fn spin(ball: &Ball, paddle: &Paddle) -> i32 {
    (ball.center_y() - paddle.center_y()) / SPIN_DIVISOR
}

/// Find the paddle the ball overlaps this tick, left checked first
pub fn paddle_contact(state: &GameState) -> Option<Side> {
    let ball = state.ball.rect();
    if ball.intersects(&state.left.rect()) {
        Some(Side::Left)
    } else if ball.intersects(&state.right.rect()) {
        Some(Side::Right)
    } else {
        None
    }
}

/// Push the ball out of `paddle` and send it back with one extra unit of speed.
///
/// `tie_break` (±1) is used for `vy` only when the spin comes out as 0.
pub fn bounce_off_paddle(ball: &mut Ball, paddle: &Paddle, tie_break: impl FnOnce() -> i32) {
    match paddle.side {
        Side::Left => {
            ball.pos.x = paddle.x() + PADDLE_WIDTH;
            ball.vel.x = ball.vel.x.abs() + 1;
        }
        Side::Right => {
            ball.pos.x = paddle.x() - ball.size;
            ball.vel.x = -ball.vel.x.abs() - 1;
        }
    }

    ball.vel.y = spin(ball, paddle);
    if ball.vel.y == 0 {
        ball.vel.y = tie_break();
    }
}

/// Side that scores if the ball has fully left the arena horizontally
pub fn scoring_side(ball: &Ball) -> Option<Side> {
    if ball.pos.x < -ball.size {
        Some(Side::Right)
    } else if ball.pos.x > ARENA_WIDTH + ball.size {
        Some(Side::Left)
    } else {
        None
    }
}
