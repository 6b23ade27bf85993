//! HUD layout helpers
//!
//! Everything a renderer needs to draw a frame, derived from a [`Snapshot`].
//! Fonts and text measurement stay with the renderer.

use crate::consts::*;
use crate::sim::{Rect, Snapshot};

/// Overlay shown while paused
pub const PAUSED_LABEL: &str = "PAUSED";

/// Controls line drawn along the bottom edge
pub const CONTROLS_HELP: &str =
    "W/S - Left player   |   Up/Down - Right player   |   Space - Pause   |   R - Reset";

/// Center line dash geometry
pub const DASH_WIDTH: i32 = 4;
pub const DASH_LENGTH: i32 = 12;
pub const DASH_SPACING: i32 = 20;

/// Score line, e.g. `"3   2"`
pub fn score_text(snapshot: &Snapshot) -> String {
    format!("{}   {}", snapshot.left_score, snapshot.right_score)
}

pub fn overlay(snapshot: &Snapshot) -> Option<&'static str> {
    snapshot.paused.then_some(PAUSED_LABEL)
}

/// Left and right paddle rectangles
pub fn paddle_rects(snapshot: &Snapshot) -> [Rect; 2] {
    [
        Rect::new(PADDLE_MARGIN, snapshot.left_paddle_y, PADDLE_WIDTH, PADDLE_HEIGHT),
        Rect::new(
            ARENA_WIDTH - PADDLE_MARGIN - PADDLE_WIDTH,
            snapshot.right_paddle_y,
            PADDLE_WIDTH,
            PADDLE_HEIGHT,
        ),
    ]
}

/// Bounding box of the ball (drawn as a circle inscribed in it)
pub fn ball_rect(snapshot: &Snapshot) -> Rect {
    Rect::new(snapshot.ball_x, snapshot.ball_y, snapshot.ball_size, snapshot.ball_size)
}

/// Dashes of the net down the middle of the arena
pub fn center_line() -> impl Iterator<Item = Rect> {
    (0..ARENA_HEIGHT)
        .step_by(DASH_SPACING as usize)
        .map(|y| Rect::new(ARENA_WIDTH / 2 - DASH_WIDTH / 2, y, DASH_WIDTH, DASH_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::Key;

    #[test]
    fn test_score_text() {
        let snapshot = Snapshot {
            left_score: 3,
            right_score: 12,
            ..Default::default()
        };
        assert_eq!(score_text(&snapshot), "3   12");
    }

    #[test]
    fn test_overlay_only_when_paused() {
        let mut snapshot = Snapshot::default();
        assert_eq!(overlay(&snapshot), None);
        snapshot.paused = true;
        assert_eq!(overlay(&snapshot), Some("PAUSED"));
    }

    #[test]
    fn test_rects_match_engine_geometry() {
        let snapshot = Snapshot::default();
        let [left, right] = paddle_rects(&snapshot);
        assert_eq!(left, Rect::new(20, 210, 12, 80));
        assert_eq!(right, Rect::new(768, 210, 12, 80));
        assert_eq!(ball_rect(&snapshot), Rect::new(393, 243, 14, 14));
    }

    #[test]
    fn test_center_line() {
        let dashes: Vec<Rect> = center_line().collect();
        assert_eq!(dashes.len(), 25);
        assert_eq!(dashes[0], Rect::new(398, 0, 4, 12));
        assert_eq!(dashes[24].y, 480);
    }

    #[test]
    fn test_controls_help_names_every_key() {
        let keys: Vec<Key> = CONTROLS_HELP
            .split('|')
            .filter_map(|entry| entry.split(" - ").next())
            .flat_map(|names| names.trim().split('/'))
            .map(|name| Key::from_name(name).unwrap_or_else(|| panic!("unknown key {name:?}")))
            .collect();
        assert_eq!(
            keys,
            vec![Key::W, Key::S, Key::Up, Key::Down, Key::Space, Key::R]
        );
    }
}
