//! The player's ship

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Body, Bullet, Outcome, Particle, TickContext, debris};
use crate::consts::*;
use crate::input::ScreenBounds;
use crate::sim::rng::RandomSource;
use crate::sim::state::GameEvent;
use crate::{degrees_to_radians, normalize_degrees, rotate_point};

/// Exhaust nozzle offset before rotation
const THRUSTER_OFFSET: Vec2 = Vec2::new(0.0, -10.0);

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ship {
    pub body: Body,
    /// Heading in degrees, [0, 360), 0 = nose up
    pub rotation: f32,
    /// Time of the last shot (ms), `None` until the first one
    pub last_shot_ms: Option<f64>,
}

impl Ship {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Body::new(pos, Vec2::ZERO, SHIP_RADIUS),
            rotation: 0.0,
            last_shot_ms: None,
        }
    }

    /// Ship at the centre of the screen
    pub fn centered(bounds: &ScreenBounds) -> Self {
        Self::new(Vec2::new(bounds.width / 2.0, bounds.height / 2.0))
    }

    /// Whether the cooldown allows firing at `now_ms`
    pub fn can_fire(&self, now_ms: f64, cooldown_ms: f64) -> bool {
        self.last_shot_ms.is_none_or(|last| now_ms - last > cooldown_ms)
    }

    pub fn evolve(&mut self, ctx: &TickContext, rng: &mut impl RandomSource) -> Outcome {
        let mut out = Outcome::default();
        let keys = &ctx.keys;

        if keys.up {
            self.thrust(rng, &mut out);
        }
        if keys.left {
            self.rotation -= SHIP_ROTATION_SPEED;
        }
        if keys.right {
            self.rotation += SHIP_ROTATION_SPEED;
        }
        if keys.space && self.can_fire(ctx.now_ms, ctx.fire_cooldown_ms) {
            out.spawn(Bullet::new(self.body.pos, normalize_degrees(self.rotation)));
            out.emit(GameEvent::Shot);
            self.last_shot_ms = Some(ctx.now_ms);
        }

        self.body.advance();
        self.body.vel *= SHIP_INERTIA;
        self.rotation = normalize_degrees(self.rotation);
        self.wrap(&ctx.bounds);

        out
    }

    /// Accelerate along the heading and puff one exhaust particle
    fn thrust(&mut self, rng: &mut impl RandomSource, out: &mut Outcome) {
        let heading = degrees_to_radians(-self.rotation);
        self.body.vel -= Vec2::new(heading.sin(), heading.cos()) * SHIP_THRUST;

        let nozzle = rotate_point(
            THRUSTER_OFFSET,
            Vec2::ZERO,
            degrees_to_radians(self.rotation - 180.0),
        );
        let lifetime = rng.between(20.0, 40.0);
        let radius = rng.between(1.0, 3.0);
        let scatter = Vec2::new(rng.between(-2.0, 2.0), rng.between(-2.0, 2.0));
        let pos = self.body.pos + nozzle + scatter;
        let vel = Vec2::new(
            nozzle.x / rng.between(3.0, 5.0),
            nozzle.y / rng.between(3.0, 5.0),
        );
        out.spawn(Particle::new(pos, vel, radius, lifetime));
        out.emit(GameEvent::Thrust);
    }

    /// Hard wrap: leaving one edge snaps to the opposite edge
    fn wrap(&mut self, bounds: &ScreenBounds) {
        let pos = &mut self.body.pos;
        if pos.x > bounds.width {
            pos.x = 0.0;
        } else if pos.x < 0.0 {
            pos.x = bounds.width;
        }
        if pos.y > bounds.height {
            pos.y = 0.0;
        } else if pos.y < 0.0 {
            pos.y = bounds.height;
        }
    }

    pub fn destroy(&mut self, rng: &mut impl RandomSource) -> Outcome {
        let mut out = Outcome::default();
        if self.body.deleted {
            return out;
        }
        self.body.deleted = true;
        out.emit(GameEvent::ShipDestroyed { pos: self.body.pos });

        for _ in 0..SHIP_EXPLOSION_PARTICLES {
            out.spawn(debris(self.body.pos, self.body.radius, (1.0, 4.0), rng));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::KeyStatus;
    use crate::sim::actors::Actor;
    use crate::sim::rng::SequenceRng;

    fn ctx(keys: KeyStatus, now_ms: f64) -> TickContext {
        TickContext::new(ScreenBounds::new(800.0, 600.0), keys, now_ms)
    }

    fn bullets(out: &Outcome) -> usize {
        out.spawned
            .iter()
            .filter(|a| matches!(a, Actor::Bullet(_)))
            .count()
    }

    #[test]
    fn test_fire_cooldown() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));
        let fire = KeyStatus {
            space: true,
            ..Default::default()
        };

        let first = ship.evolve(&ctx(fire, 1000.0), &mut rng);
        let second = ship.evolve(&ctx(fire, 1200.0), &mut rng);
        assert_eq!(bullets(&first) + bullets(&second), 1);
        assert!(first.events.contains(&GameEvent::Shot));

        // Cooldown is strict: exactly 300ms later is still too soon
        let third = ship.evolve(&ctx(fire, 1300.0), &mut rng);
        assert_eq!(bullets(&third), 0);
        let fourth = ship.evolve(&ctx(fire, 1301.0), &mut rng);
        assert_eq!(bullets(&fourth), 1);
    }

    #[test]
    fn test_first_shot_at_time_zero() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));
        let fire = KeyStatus {
            space: true,
            ..Default::default()
        };
        assert_eq!(bullets(&ship.evolve(&ctx(fire, 0.0), &mut rng)), 1);
    }

    #[test]
    fn test_bullet_spawns_at_muzzle() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));
        let fire = KeyStatus {
            space: true,
            ..Default::default()
        };
        let out = ship.evolve(&ctx(fire, 0.0), &mut rng);
        let Some(Actor::Bullet(bullet)) = out.spawned.first() else {
            panic!("expected a bullet");
        };
        assert!((bullet.body.pos - Vec2::new(400.0, 280.0)).length() < 1e-4);
        assert!((bullet.body.vel - Vec2::new(0.0, -10.0)).length() < 1e-4);
    }

    #[test]
    fn test_thrust_accelerates_nose_first() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));
        let up = KeyStatus {
            up: true,
            ..Default::default()
        };
        let out = ship.evolve(&ctx(up, 0.0), &mut rng);

        // Velocity -0.15 on y, then damped once
        assert!(ship.body.vel.x.abs() < 1e-6);
        assert!((ship.body.vel.y - (-0.15 * SHIP_INERTIA)).abs() < 1e-6);
        assert!((ship.body.pos.y - (300.0 - 0.15)).abs() < 1e-4);

        assert_eq!(out.spawned.len(), 1);
        assert!(out.events.contains(&GameEvent::Thrust));
        let Actor::Particle(p) = &out.spawned[0] else {
            panic!("expected exhaust particle");
        };
        // Nozzle sits behind the ship: rotated (0,-10) by -180 degrees is (0,10)
        assert!((p.body.pos - Vec2::new(400.0, 310.0)).length() < 1e-3);
        assert!((p.lifetime - 30.0).abs() < 1e-4);
    }

    #[test]
    fn test_rotation_wraps() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));
        let left = KeyStatus {
            left: true,
            ..Default::default()
        };
        ship.evolve(&ctx(left, 0.0), &mut rng);
        assert_eq!(ship.rotation, 354.0);

        let right = KeyStatus {
            right: true,
            ..Default::default()
        };
        ship.evolve(&ctx(right, 0.0), &mut rng);
        assert_eq!(ship.rotation, 0.0);
    }

    #[test]
    fn test_hard_wrap() {
        let mut rng = SequenceRng::constant(0.5);
        let idle = ctx(KeyStatus::default(), 0.0);

        let mut ship = Ship::new(Vec2::new(801.0, 300.0));
        ship.evolve(&idle, &mut rng);
        assert_eq!(ship.body.pos.x, 0.0);

        let mut ship = Ship::new(Vec2::new(-1.0, 300.0));
        ship.evolve(&idle, &mut rng);
        assert_eq!(ship.body.pos.x, 800.0);

        let mut ship = Ship::new(Vec2::new(400.0, 601.0));
        ship.evolve(&idle, &mut rng);
        assert_eq!(ship.body.pos.y, 0.0);

        let mut ship = Ship::new(Vec2::new(400.0, -1.0));
        ship.evolve(&idle, &mut rng);
        assert_eq!(ship.body.pos.y, 600.0);
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut rng = SequenceRng::constant(0.5);
        let mut ship = Ship::new(Vec2::new(400.0, 300.0));

        let first = ship.destroy(&mut rng);
        assert!(ship.body.deleted);
        assert_eq!(first.spawned.len(), SHIP_EXPLOSION_PARTICLES);
        assert_eq!(first.events.len(), 1);

        let second = ship.destroy(&mut rng);
        assert!(second.is_empty());
    }
}
