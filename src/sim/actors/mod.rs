//! Actor variants
//!
//! Every live object in the field is an [`Actor`]: a closed set of variants
//! sharing a [`Body`] (position, velocity, radius, deletion flag). Actors
//! never touch each other or the live collection directly. `evolve` and
//! `destroy` instead return an [`Outcome`] listing newly spawned actors and
//! gameplay events, which the orchestrator merges after the current pass.

pub mod asteroid;
pub mod bullet;
pub mod particle;
pub mod ship;

pub use asteroid::Asteroid;
pub use bullet::Bullet;
pub use particle::Particle;
pub use ship::Ship;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rng::RandomSource;
use super::state::GameEvent;
use crate::consts::FIRE_COOLDOWN_MS;
use crate::input::{KeyStatus, ScreenBounds};

/// Kinematic state shared by every variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Assigned when the actor joins the live collection (0 until then)
    pub id: u32,
    pub pos: Vec2,
    pub vel: Vec2,
    pub radius: f32,
    /// Once set, never cleared
    pub deleted: bool,
}

impl Body {
    pub fn new(pos: Vec2, vel: Vec2, radius: f32) -> Self {
        debug_assert!(radius > 0.0, "actor radius must be positive");
        Self {
            id: 0,
            pos,
            vel,
            radius,
            deleted: false,
        }
    }

    /// Integrate one tick of motion
    #[inline]
    pub fn advance(&mut self) {
        self.pos += self.vel;
    }
}

/// Variant discriminant, declared in draw order (back to front)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ActorKind {
    Particle,
    Asteroid,
    Bullet,
    Ship,
}

/// Per-tick inputs shared by every `evolve` call
#[derive(Debug, Clone, Copy)]
pub struct TickContext {
    pub bounds: ScreenBounds,
    pub keys: KeyStatus,
    /// Wall clock in milliseconds, used for the fire cooldown
    pub now_ms: f64,
    pub fire_cooldown_ms: f64,
}

impl TickContext {
    pub fn new(bounds: ScreenBounds, keys: KeyStatus, now_ms: f64) -> Self {
        Self {
            bounds,
            keys,
            now_ms,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
        }
    }
}

/// Side effects of an actor update, applied centrally by the orchestrator
#[derive(Debug, Default)]
pub struct Outcome {
    pub spawned: Vec<Actor>,
    pub events: Vec<GameEvent>,
}

impl Outcome {
    pub fn is_empty(&self) -> bool {
        self.spawned.is_empty() && self.events.is_empty()
    }

    pub fn spawn(&mut self, actor: impl Into<Actor>) {
        self.spawned.push(actor.into());
    }

    pub fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    pub fn merge(&mut self, other: Outcome) {
        self.spawned.extend(other.spawned);
        self.events.extend(other.events);
    }
}

/// A live object in the field
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Actor {
    Ship(Ship),
    Asteroid(Asteroid),
    Bullet(Bullet),
    Particle(Particle),
}

impl Actor {
    pub fn kind(&self) -> ActorKind {
        match self {
            Actor::Ship(_) => ActorKind::Ship,
            Actor::Asteroid(_) => ActorKind::Asteroid,
            Actor::Bullet(_) => ActorKind::Bullet,
            Actor::Particle(_) => ActorKind::Particle,
        }
    }

    pub fn body(&self) -> &Body {
        match self {
            Actor::Ship(a) => &a.body,
            Actor::Asteroid(a) => &a.body,
            Actor::Bullet(a) => &a.body,
            Actor::Particle(a) => &a.body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Actor::Ship(a) => &mut a.body,
            Actor::Asteroid(a) => &mut a.body,
            Actor::Bullet(a) => &mut a.body,
            Actor::Particle(a) => &mut a.body,
        }
    }

    pub fn id(&self) -> u32 {
        self.body().id
    }

    pub fn pos(&self) -> Vec2 {
        self.body().pos
    }

    pub fn radius(&self) -> f32 {
        self.body().radius
    }

    pub fn is_deleted(&self) -> bool {
        self.body().deleted
    }

    /// Orientation in degrees, for variants that have one
    pub fn rotation(&self) -> Option<f32> {
        match self {
            Actor::Ship(a) => Some(a.rotation),
            Actor::Asteroid(a) => Some(a.rotation),
            Actor::Bullet(a) => Some(a.rotation),
            Actor::Particle(_) => None,
        }
    }

    /// Advance this actor by exactly one tick
    pub fn evolve(&mut self, ctx: &TickContext, rng: &mut impl RandomSource) -> Outcome {
        let outcome = match self {
            Actor::Ship(a) => a.evolve(ctx, rng),
            Actor::Asteroid(a) => {
                a.evolve(&ctx.bounds);
                Outcome::default()
            }
            Actor::Bullet(a) => {
                a.evolve(&ctx.bounds);
                Outcome::default()
            }
            Actor::Particle(a) => {
                a.evolve();
                Outcome::default()
            }
        };
        self.debug_check();
        outcome
    }

    /// Mark this actor deleted. Repeated calls are no-ops.
    pub fn destroy(&mut self, rng: &mut impl RandomSource) -> Outcome {
        match self {
            Actor::Ship(a) => a.destroy(rng),
            Actor::Asteroid(a) => a.destroy(rng),
            Actor::Bullet(a) => {
                a.destroy();
                Outcome::default()
            }
            Actor::Particle(a) => {
                a.destroy();
                Outcome::default()
            }
        }
    }

    #[inline]
    fn debug_check(&self) {
        debug_assert!(self.radius() > 0.0, "{:?} radius went non-positive", self.kind());
        if let Some(rotation) = self.rotation() {
            debug_assert!(
                (0.0..360.0).contains(&rotation),
                "{:?} rotation {} out of range",
                self.kind(),
                rotation
            );
        }
    }
}

impl From<Ship> for Actor {
    fn from(ship: Ship) -> Self {
        Actor::Ship(ship)
    }
}

impl From<Asteroid> for Actor {
    fn from(asteroid: Asteroid) -> Self {
        Actor::Asteroid(asteroid)
    }
}

impl From<Bullet> for Actor {
    fn from(bullet: Bullet) -> Self {
        Actor::Bullet(bullet)
    }
}

impl From<Particle> for Actor {
    fn from(particle: Particle) -> Self {
        Actor::Particle(particle)
    }
}

/// Spawn a debris particle near `origin`, shared by ship and asteroid
/// explosions. Spread is a quarter of the source radius on each axis.
pub(crate) fn debris(
    origin: Vec2,
    source_radius: f32,
    size: (f32, f32),
    rng: &mut impl RandomSource,
) -> Particle {
    use crate::consts::DEBRIS_MAX_SPEED;

    let spread = source_radius / 4.0;
    let pos = origin
        + Vec2::new(
            rng.between(-spread, spread),
            rng.between(-spread, spread),
        );
    let vel = Vec2::new(
        rng.between(-DEBRIS_MAX_SPEED, DEBRIS_MAX_SPEED),
        rng.between(-DEBRIS_MAX_SPEED, DEBRIS_MAX_SPEED),
    );
    let radius = rng.between(size.0, size.1);
    let lifetime = rng.between(60.0, 100.0);
    Particle::new(pos, vel, radius, lifetime)
}
