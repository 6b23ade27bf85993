//! Game state and core simulation types
//!
//! Everything the engine mutates during a tick lives in [`GameState`].
//! Renderers only ever see the flattened [`Snapshot`].

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::collision::Rect;
use crate::consts::*;

/// Which half of the arena a paddle (or a scoring player) belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// Horizontal direction the ball travels when served toward this side
    pub fn direction(self) -> i32 {
        match self {
            Side::Left => -1,
            Side::Right => 1,
        }
    }
}

/// Current phase of play
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ball and paddles advance every tick
    #[default]
    Running,
    /// Positions are frozen until the next pause toggle
    Paused,
}

impl GamePhase {
    pub fn toggled(self) -> Self {
        match self {
            GamePhase::Running => GamePhase::Paused,
            GamePhase::Paused => GamePhase::Running,
        }
    }
}

/// One of the two player paddles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Paddle {
    pub side: Side,
    /// Top edge, kept within `0..=ARENA_HEIGHT - PADDLE_HEIGHT`
    pub y: i32,
}

impl Paddle {
    /// Paddle vertically centered in the arena
    pub fn centered(side: Side) -> Self {
        Self {
            side,
            y: ARENA_HEIGHT / 2 - PADDLE_HEIGHT / 2,
        }
    }

    /// Fixed left edge for this side
    pub fn x(&self) -> i32 {
        match self.side {
            Side::Left => PADDLE_MARGIN,
            Side::Right => ARENA_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
        }
    }

    pub fn center_y(&self) -> i32 {
        self.y + PADDLE_HEIGHT / 2
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x(), self.y, PADDLE_WIDTH, PADDLE_HEIGHT)
    }

    /// Move by `dir * PADDLE_SPEED` and clamp into the arena
    pub fn shift(&mut self, dir: i32) {
        self.y += dir * PADDLE_SPEED;
        self.clamp();
    }

    pub fn clamp(&mut self) {
        self.y = self.y.clamp(0, PADDLE_MAX_Y);
    }

    pub fn in_bounds(&self) -> bool {
        (0..=PADDLE_MAX_Y).contains(&self.y)
    }
}

/// The ball. `pos` is the top-left corner of its square bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: IVec2,
    pub vel: IVec2,
    pub size: i32,
}

impl Ball {
    /// Ball at the arena center with the opening serve velocity
    pub fn kickoff() -> Self {
        Self {
            pos: Self::center(),
            vel: IVec2::new(SERVE_VX, SERVE_VY),
            size: BALL_SIZE,
        }
    }

    /// Top-left position that centers the ball in the arena
    pub fn center() -> IVec2 {
        IVec2::new(ARENA_WIDTH / 2 - BALL_SIZE / 2, ARENA_HEIGHT / 2 - BALL_SIZE / 2)
    }

    pub fn center_y(&self) -> i32 {
        self.pos.y + self.size / 2
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.size, self.size)
    }

    /// Recenter and serve toward `toward`; `vertical` picks the sign of `vy`
    pub fn serve(&mut self, toward: Side, vertical: i32) {
        self.pos = Self::center();
        self.vel = IVec2::new(toward.direction() * SERVE_VX, vertical.signum() * SERVE_VY);
    }

    /// Saturate each velocity component into `[-BALL_MAX_SPEED, BALL_MAX_SPEED]`
    pub fn clamp_speed(&mut self) {
        self.vel = self
            .vel
            .clamp(IVec2::splat(-BALL_MAX_SPEED), IVec2::splat(BALL_MAX_SPEED));
    }

    pub fn speed_in_bounds(&self) -> bool {
        self.vel.x.abs() <= BALL_MAX_SPEED && self.vel.y.abs() <= BALL_MAX_SPEED
    }
}

/// Points per player for the current session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn award(&mut self, side: Side) {
        match side {
            Side::Left => self.left += 1,
            Side::Right => self.right += 1,
        }
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub left: Paddle,
    pub right: Paddle,
    pub ball: Ball,
    pub score: Score,
    pub phase: GamePhase,
    /// Ticks simulated while running
    pub time_ticks: u64,
    /// Sum of `dt` over running ticks, in seconds
    pub play_time: f32,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

impl GameState {
    /// Paddles centered, ball centered moving `(SERVE_VX, SERVE_VY)`, 0-0, running
    pub fn new() -> Self {
        Self {
            left: Paddle::centered(Side::Left),
            right: Paddle::centered(Side::Right),
            ball: Ball::kickoff(),
            score: Score::default(),
            phase: GamePhase::Running,
            time_ticks: 0,
            play_time: 0.0,
        }
    }

    pub fn is_paused(&self) -> bool {
        self.phase == GamePhase::Paused
    }

    pub fn paddle(&self, side: Side) -> &Paddle {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            left_paddle_y: self.left.y,
            right_paddle_y: self.right.y,
            ball_x: self.ball.pos.x,
            ball_y: self.ball.pos.y,
            ball_size: self.ball.size,
            left_score: self.score.left,
            right_score: self.score.right,
            paused: self.is_paused(),
            time_ticks: self.time_ticks,
            play_time: self.play_time,
        }
    }
}

/// Read-only view handed to renderers after each tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub left_paddle_y: i32,
    pub right_paddle_y: i32,
    pub ball_x: i32,
    pub ball_y: i32,
    pub ball_size: i32,
    pub left_score: u32,
    pub right_score: u32,
    pub paused: bool,
    pub time_ticks: u64,
    pub play_time: f32,
}

impl Default for Snapshot {
    fn default() -> Self {
        GameState::new().snapshot()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_layout() {
        let state = GameState::new();
        assert_eq!(state.left.y, 210);
        assert_eq!(state.right.y, 210);
        assert_eq!(state.ball.pos, IVec2::new(393, 243));
        assert_eq!(state.ball.vel, IVec2::new(5, 3));
        assert_eq!(state.score, Score::default());
        assert!(!state.is_paused());
    }

    #[test]
    fn test_paddle_x_positions() {
        assert_eq!(Paddle::centered(Side::Left).x(), 20);
        assert_eq!(Paddle::centered(Side::Right).x(), 768);
    }

    #[test]
    fn test_paddle_shift_clamps() {
        let mut paddle = Paddle { side: Side::Left, y: 3 };
        paddle.shift(-1);
        assert_eq!(paddle.y, 0);

        paddle.y = PADDLE_MAX_Y - 2;
        paddle.shift(1);
        assert_eq!(paddle.y, PADDLE_MAX_Y);
        assert!(paddle.in_bounds());
    }

    #[test]
    fn test_serve_directions() {
        let mut ball = Ball::kickoff();
        ball.pos = IVec2::new(-40, 10);

        ball.serve(Side::Left, 1);
        assert_eq!(ball.pos, Ball::center());
        assert_eq!(ball.vel, IVec2::new(-SERVE_VX, SERVE_VY));

        ball.serve(Side::Right, -1);
        assert_eq!(ball.vel, IVec2::new(SERVE_VX, -SERVE_VY));
    }

    #[test]
    fn test_clamp_speed_saturates() {
        let mut ball = Ball::kickoff();
        ball.vel = IVec2::new(20, -15);
        ball.clamp_speed();
        assert_eq!(ball.vel, IVec2::new(14, -14));
        assert!(ball.speed_in_bounds());
    }

    #[test]
    fn test_score_award_and_clear() {
        let mut score = Score::default();
        score.award(Side::Left);
        score.award(Side::Right);
        score.award(Side::Right);
        assert_eq!((score.left, score.right), (1, 2));
        score.clear();
        assert_eq!((score.left, score.right), (0, 0));
    }

    #[test]
    fn test_phase_toggle() {
        assert_eq!(GamePhase::Running.toggled(), GamePhase::Paused);
        assert_eq!(GamePhase::Paused.toggled(), GamePhase::Running);
    }
}
