//! Ship projectiles

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Body;
use crate::consts::*;
use crate::input::ScreenBounds;
use crate::{degrees_to_radians, rotate_point};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bullet {
    pub body: Body,
    /// Heading at spawn (degrees); only used for drawing
    pub rotation: f32,
}

impl Bullet {
    /// Spawn at the muzzle of a ship at `origin` facing `rotation` degrees.
    /// Travels half the muzzle offset per tick.
    pub fn new(origin: Vec2, rotation: f32) -> Self {
        let (mx, my) = BULLET_MUZZLE;
        let muzzle = rotate_point(Vec2::new(mx, my), Vec2::ZERO, degrees_to_radians(rotation));
        Self {
            body: Body::new(origin + muzzle, muzzle / 2.0, BULLET_RADIUS),
            rotation,
        }
    }

    /// Move, then self-destruct once outside the screen (no wrap)
    pub fn evolve(&mut self, bounds: &ScreenBounds) {
        self.body.advance();
        if !bounds.contains(self.body.pos) {
            self.destroy();
        }
    }

    pub fn destroy(&mut self) {
        self.body.deleted = true;
    }
}
