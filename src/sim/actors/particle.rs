//! Short-lived debris and exhaust

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::Body;
use crate::consts::*;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Particle {
    pub body: Body,
    /// Ticks left to live; the particle dies once this goes negative
    pub lifetime: f32,
}

impl Particle {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32, lifetime: f32) -> Self {
        Self {
            body: Body::new(pos, vel, radius),
            lifetime,
        }
    }

    pub fn evolve(&mut self) {
        self.body.advance();
        self.body.vel *= PARTICLE_INERTIA;
        self.body.radius = (self.body.radius - PARTICLE_SHRINK).max(PARTICLE_MIN_RADIUS);

        self.lifetime -= 1.0;
        if self.lifetime < 0.0 {
            self.destroy();
        }
    }

    pub fn destroy(&mut self) {
        self.body.deleted = true;
    }
}
