//! Input snapshots and screen bounds
//!
//! The simulation never reads devices. A platform layer tracks key presses
//! and window size, and hands an immutable snapshot to each frame.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// Keys the game reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    A,
    D,
    W,
    S,
    Space,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.code` string
    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "ArrowLeft" => Some(Key::ArrowLeft),
            "ArrowRight" => Some(Key::ArrowRight),
            "ArrowUp" => Some(Key::ArrowUp),
            "ArrowDown" => Some(Key::ArrowDown),
            "KeyA" => Some(Key::A),
            "KeyD" => Some(Key::D),
            "KeyW" => Some(Key::W),
            "KeyS" => Some(Key::S),
            "Space" => Some(Key::Space),
            _ => None,
        }
    }
}

/// Snapshot of the controls held down this frame
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyStatus {
    pub left: bool,
    pub right: bool,
    /// Thrust
    pub up: bool,
    /// Tracked but unused by the ship
    pub down: bool,
    /// Fire
    pub space: bool,
}

impl KeyStatus {
    /// Update the control bound to `key`
    pub fn apply(&mut self, key: Key, pressed: bool) {
        match key {
            Key::ArrowLeft | Key::A => self.left = pressed,
            Key::ArrowRight | Key::D => self.right = pressed,
            Key::ArrowUp | Key::W => self.up = pressed,
            Key::ArrowDown | Key::S => self.down = pressed,
            Key::Space => self.space = pressed,
        }
    }
}

/// Playfield size in logical pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreenBounds {
    pub width: f32,
    pub height: f32,
    /// Device pixel ratio; passed through to renderers, unused by physics
    pub ratio: f32,
}

impl ScreenBounds {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_ratio(width, height, 1.0)
    }

    pub fn with_ratio(width: f32, height: f32, ratio: f32) -> Self {
        debug_assert!(width > 0.0 && height > 0.0, "screen must have area");
        Self {
            width,
            height,
            ratio,
        }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Whether `pos` lies in [0, width] x [0, height]
    pub fn contains(&self, pos: Vec2) -> bool {
        pos.x >= 0.0 && pos.y >= 0.0 && pos.x <= self.width && pos.y <= self.height
    }

    /// Backing-store size in device pixels
    pub fn physical_size(&self) -> (u32, u32) {
        (
            (self.width * self.ratio).round() as u32,
            (self.height * self.ratio).round() as u32,
        )
    }
}

impl Default for ScreenBounds {
    fn default() -> Self {
        Self::new(800.0, 600.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_bindings() {
        let mut keys = KeyStatus::default();
        keys.apply(Key::A, true);
        keys.apply(Key::W, true);
        keys.apply(Key::Space, true);
        assert!(keys.left && keys.up && keys.space);
        assert!(!keys.right);

        keys.apply(Key::ArrowLeft, false);
        assert!(!keys.left);
    }

    #[test]
    fn test_from_code() {
        assert_eq!(Key::from_code("KeyD"), Some(Key::D));
        assert_eq!(Key::from_code("Space"), Some(Key::Space));
        assert_eq!(Key::from_code("Enter"), None);
    }

    #[test]
    fn test_bounds_contains_edges() {
        let b = ScreenBounds::new(800.0, 600.0);
        assert!(b.contains(Vec2::new(0.0, 0.0)));
        assert!(b.contains(Vec2::new(800.0, 600.0)));
        assert!(!b.contains(Vec2::new(800.1, 10.0)));
        assert!(!b.contains(Vec2::new(10.0, -0.1)));
    }

    #[test]
    fn test_physical_size() {
        let b = ScreenBounds::with_ratio(800.0, 600.0, 2.0);
        assert_eq!(b.physical_size(), (1600, 1200));
    }
}
