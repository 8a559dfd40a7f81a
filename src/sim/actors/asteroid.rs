//! Asteroids and their fragmentation

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::{Body, Outcome, debris};
use crate::consts::*;
use crate::input::ScreenBounds;
use crate::normalize_degrees;
use crate::sim::geometry::asteroid_vertices;
use crate::sim::rng::RandomSource;
use crate::sim::state::GameEvent;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asteroid {
    pub body: Body,
    /// Degrees, [0, 360)
    pub rotation: f32,
    /// Degrees per tick, fixed at spawn
    pub rotation_speed: f32,
    /// Points awarded when destroyed
    pub score_value: u32,
    /// Outline offsets from `body.pos`, fixed at spawn
    pub vertices: Vec<Vec2>,
}

/// Points for destroying an asteroid of the given radius: smaller is worth more.
///
/// The scale is anchored at radius 80 whatever the tuned wave radius is.
/// Radii that halve down from 80 score exactly; any other radius is
/// rounded to the nearest point (radius 15 scores 27).
pub fn score_for_radius(radius: f32) -> u32 {
    ((ASTEROID_WAVE_RADIUS / radius) * 5.0).round() as u32
}

impl Asteroid {
    /// Spawn an asteroid drifting in a random direction with a random spin
    pub fn new(pos: Vec2, radius: f32, rng: &mut impl RandomSource) -> Self {
        let vel = Vec2::new(
            rng.between(-ASTEROID_MAX_SPEED, ASTEROID_MAX_SPEED),
            rng.between(-ASTEROID_MAX_SPEED, ASTEROID_MAX_SPEED),
        );
        let rotation_speed = rng.between(-1.0, 1.0);
        let vertices = asteroid_vertices(ASTEROID_VERTEX_COUNT, radius, rng);
        Self {
            body: Body::new(pos, vel, radius),
            rotation: 0.0,
            rotation_speed,
            score_value: score_for_radius(radius),
            vertices,
        }
    }

    /// Whether destroying this asteroid splits it into children
    pub fn splits(&self) -> bool {
        self.body.radius > ASTEROID_MIN_SPLIT_RADIUS
    }

    pub fn evolve(&mut self, bounds: &ScreenBounds) {
        self.body.advance();
        self.rotation = normalize_degrees(self.rotation + self.rotation_speed);
        self.wrap(bounds);
    }

    /// Soft wrap: the asteroid leaves the screen entirely before it
    /// reappears on the opposite side, one radius beyond the edge.
    fn wrap(&mut self, bounds: &ScreenBounds) {
        let r = self.body.radius;
        let pos = &mut self.body.pos;
        if pos.x > bounds.width + r {
            pos.x = -r;
        } else if pos.x < -r {
            pos.x = bounds.width + r;
        }
        if pos.y > bounds.height + r {
            pos.y = -r;
        } else if pos.y < -r {
            pos.y = bounds.height + r;
        }
    }

    /// Explode into debris and, above the split radius, two half-size children
    pub fn destroy(&mut self, rng: &mut impl RandomSource) -> Outcome {
        let mut out = Outcome::default();
        if self.body.deleted {
            return out;
        }
        self.body.deleted = true;
        out.emit(GameEvent::AsteroidDestroyed {
            pos: self.body.pos,
            radius: self.body.radius,
            points: self.score_value,
        });

        let debris_count = self.body.radius.floor() as usize;
        for _ in 0..debris_count {
            out.spawn(debris(self.body.pos, self.body.radius, (1.0, 3.0), rng));
        }

        if self.splits() {
            let (lo, hi) = ASTEROID_CHILD_OFFSET;
            for _ in 0..ASTEROID_CHILDREN {
                let pos = self.body.pos + Vec2::new(rng.between(lo, hi), rng.between(lo, hi));
                out.spawn(Asteroid::new(pos, self.body.radius / 2.0, rng));
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actors::Actor;
    use crate::sim::rng::SequenceRng;
    use proptest::prelude::*;

    fn count(out: &Outcome) -> (usize, usize) {
        let children = out
            .spawned
            .iter()
            .filter(|a| matches!(a, Actor::Asteroid(_)))
            .count();
        let particles = out
            .spawned
            .iter()
            .filter(|a| matches!(a, Actor::Particle(_)))
            .count();
        (children, particles)
    }

    #[test]
    fn test_score_values() {
        assert_eq!(score_for_radius(80.0), 5);
        assert_eq!(score_for_radius(40.0), 10);
        assert_eq!(score_for_radius(20.0), 20);
        assert_eq!(score_for_radius(10.0), 40);
        assert_eq!(score_for_radius(5.0), 80);
    }

    #[test]
    fn test_off_chain_radii_round_to_nearest() {
        // Children of a 60-radius wave: 30, 15, 7.5
        assert_eq!(score_for_radius(60.0), 7);
        assert_eq!(score_for_radius(30.0), 13);
        assert_eq!(score_for_radius(15.0), 27);
        assert_eq!(score_for_radius(7.5), 53);
    }

    #[test]
    fn test_large_asteroid_fragments() {
        let mut rng = SequenceRng::new(vec![0.2, 0.7, 0.5, 0.9]);
        let mut rock = Asteroid::new(Vec2::new(400.0, 300.0), 80.0, &mut rng);
        let out = rock.destroy(&mut rng);

        assert_eq!(count(&out), (2, 80));
        for actor in &out.spawned {
            if let Actor::Asteroid(child) = actor {
                assert_eq!(child.body.radius, 40.0);
                let offset = child.body.pos - Vec2::new(400.0, 300.0);
                assert!((-10.0..=20.0).contains(&offset.x));
                assert!((-10.0..=20.0).contains(&offset.y));
            }
        }
        assert_eq!(
            out.events,
            vec![GameEvent::AsteroidDestroyed {
                pos: Vec2::new(400.0, 300.0),
                radius: 80.0,
                points: 5,
            }]
        );
    }

    #[test]
    fn test_small_asteroid_is_terminal() {
        let mut rng = SequenceRng::constant(0.3);
        let mut rock = Asteroid::new(Vec2::new(100.0, 100.0), 10.0, &mut rng);
        let out = rock.destroy(&mut rng);
        assert_eq!(count(&out), (0, 10));
    }

    #[test]
    fn test_destroy_is_idempotent() {
        let mut rng = SequenceRng::constant(0.3);
        let mut rock = Asteroid::new(Vec2::new(100.0, 100.0), 40.0, &mut rng);
        let first = rock.destroy(&mut rng);
        let second = rock.destroy(&mut rng);
        assert_eq!(count(&first), (2, 40));
        assert!(second.is_empty());
    }

    #[test]
    fn test_rotation_stays_normalized() {
        let mut rng = SequenceRng::constant(0.0);
        let mut rock = Asteroid::new(Vec2::new(100.0, 100.0), 40.0, &mut rng);
        // between(-1, 1) at 0.0 spins at -1 degree per tick
        assert_eq!(rock.rotation_speed, -1.0);
        rock.evolve(&ScreenBounds::new(800.0, 600.0));
        assert_eq!(rock.rotation, 359.0);
    }

    proptest! {
        #[test]
        fn prop_soft_wrap(
            x in -200.0f32..1000.0,
            y in -200.0f32..800.0,
            radius in prop::sample::select(vec![5.0f32, 10.0, 20.0, 40.0, 80.0]),
        ) {
            let bounds = ScreenBounds::new(800.0, 600.0);
            let mut rng = SequenceRng::constant(0.5);
            let mut rock = Asteroid::new(Vec2::new(x, y), radius, &mut rng);
            // Zero drift so the wrap is the only thing moving the rock
            rock.body.vel = Vec2::ZERO;
            rock.evolve(&bounds);

            if x > bounds.width + radius {
                prop_assert_eq!(rock.body.pos.x, -radius);
            } else if x < -radius {
                prop_assert_eq!(rock.body.pos.x, bounds.width + radius);
            } else {
                prop_assert_eq!(rock.body.pos.x, x);
            }
            if y > bounds.height + radius {
                prop_assert_eq!(rock.body.pos.y, -radius);
            } else if y < -radius {
                prop_assert_eq!(rock.body.pos.y, bounds.height + radius);
            } else {
                prop_assert_eq!(rock.body.pos.y, y);
            }
        }
    }
}
