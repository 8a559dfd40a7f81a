//! Asteroids - A wrapped-plane arcade shooter
//!
//! Core modules:
//! - `sim`: Actor simulation (physics, collisions, spawning, game state)
//! - `input`: Key status snapshots and screen bounds consumed by the sim
//! - `render`: Draw data handed to an external renderer
//! - `audio`: Sound cue sink driven by simulation events
//! - `highscores`: Persistent top score store
//! - `platform`: Browser/native clock abstraction
//! - `session`: A game bound to its store, audio, keys and screen
//! - `tuning`: Data-driven game balance
//! - `web`: wasm-bindgen handle for the browser page (WASM only)

pub mod audio;
pub mod error;
pub mod highscores;
pub mod input;
pub mod platform;
pub mod render;
pub mod session;
pub mod sim;
pub mod tuning;
#[cfg(target_arch = "wasm32")]
pub mod web;

pub use highscores::{JsonFileStore, MemoryStore, ScoreStore};
pub use input::{Key, KeyStatus, ScreenBounds};
pub use session::Session;
pub use tuning::Tuning;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    /// Ship defaults
    pub const SHIP_RADIUS: f32 = 20.0;
    /// Degrees per tick while a turn key is held
    pub const SHIP_ROTATION_SPEED: f32 = 6.0;
    pub const SHIP_THRUST: f32 = 0.15;
    /// Multiplicative velocity damping per tick
    pub const SHIP_INERTIA: f32 = 0.99;
    pub const SHIP_EXPLOSION_PARTICLES: usize = 60;

    /// Asteroid defaults
    pub const ASTEROID_WAVE_RADIUS: f32 = 80.0;
    pub const ASTEROID_MAX_SPEED: f32 = 1.5;
    pub const ASTEROID_VERTEX_COUNT: usize = 8;
    /// Asteroids at or below this radius no longer split
    pub const ASTEROID_MIN_SPLIT_RADIUS: f32 = 10.0;
    pub const ASTEROID_CHILDREN: usize = 2;
    /// Child spawn offset range, per axis
    pub const ASTEROID_CHILD_OFFSET: (f32, f32) = (-10.0, 20.0);

    /// Bullet defaults
    pub const BULLET_RADIUS: f32 = 2.0;
    /// Muzzle offset from the ship centre, before rotation
    pub const BULLET_MUZZLE: (f32, f32) = (0.0, -20.0);

    /// Particle defaults
    pub const PARTICLE_INERTIA: f32 = 0.98;
    pub const PARTICLE_SHRINK: f32 = 0.1;
    pub const PARTICLE_MIN_RADIUS: f32 = 0.1;
    pub const DEBRIS_MAX_SPEED: f32 = 1.5;

    /// Orchestrator defaults
    pub const INITIAL_ASTEROID_COUNT: u32 = 3;
    pub const FIRE_COOLDOWN_MS: f64 = 300.0;
    /// Half-width of the no-spawn window around the ship
    pub const SPAWN_CLEARANCE: f32 = 60.0;
}

/// Normalize an angle in degrees to [0, 360)
#[inline]
pub fn normalize_degrees(mut angle: f32) -> f32 {
    angle %= 360.0;
    if angle < 0.0 {
        angle += 360.0;
    }
    // -1e-6 % 360 + 360 rounds to 360.0 in f32
    if angle >= 360.0 {
        angle -= 360.0;
    }
    angle
}

#[inline]
pub fn degrees_to_radians(degrees: f32) -> f32 {
    degrees * std::f32::consts::PI / 180.0
}

/// Rotate `point` about `center` by `angle` radians (screen space, y down)
#[inline]
pub fn rotate_point(point: Vec2, center: Vec2, angle: f32) -> Vec2 {
    let (sin, cos) = angle.sin_cos();
    let d = point - center;
    Vec2::new(d.x * cos - d.y * sin, d.x * sin + d.y * cos) + center
}
