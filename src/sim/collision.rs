//! Collision detection and resolution
//!
//! Plain circle overlap, checked once per frame at current positions. There
//! is no swept test, so a fast bullet can tunnel through a small asteroid.

use glam::Vec2;

use super::actors::{Actor, Outcome};
use super::rng::RandomSource;

/// Whether two circles strictly overlap
#[inline]
pub fn circles_overlap(a_pos: Vec2, a_radius: f32, b_pos: Vec2, b_radius: f32) -> bool {
    a_pos.distance(b_pos) < a_radius + b_radius
}

/// All overlapping (a, b) index pairs between two groups of `actors`.
///
/// Pairs are listed in sweep order: both groups walked from last to first,
/// `group_a` in the outer loop. Actors already marked deleted still match.
pub fn find_hits(actors: &[Actor], group_a: &[usize], group_b: &[usize]) -> Vec<(usize, usize)> {
    let mut hits = Vec::new();
    for &a in group_a.iter().rev() {
        let (a_pos, a_radius) = (actors[a].pos(), actors[a].radius());
        for &b in group_b.iter().rev() {
            if circles_overlap(a_pos, a_radius, actors[b].pos(), actors[b].radius()) {
                hits.push((a, b));
            }
        }
    }
    hits
}

/// Destroy both members of every overlapping pair.
///
/// One actor may match several opponents in the same sweep; `destroy` is
/// idempotent so only its first hit awards score or spawns fragments.
/// Spawned actors are returned, not inserted, so the sweep never sees them.
pub fn resolve(
    actors: &mut [Actor],
    group_a: &[usize],
    group_b: &[usize],
    rng: &mut impl RandomSource,
) -> Outcome {
    let mut out = Outcome::default();
    for (a, b) in find_hits(actors, group_a, group_b) {
        out.merge(actors[a].destroy(rng));
        out.merge(actors[b].destroy(rng));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::actors::{Asteroid, Bullet, Ship};
    use crate::sim::rng::SequenceRng;
    use crate::sim::state::GameEvent;
    use proptest::prelude::*;
    use std::collections::BTreeSet;

    fn rock(x: f32, y: f32, radius: f32) -> Actor {
        let mut rng = SequenceRng::constant(0.5);
        Asteroid::new(Vec2::new(x, y), radius, &mut rng).into()
    }

    fn bullet_at(x: f32, y: f32) -> Actor {
        let mut b = Bullet::new(Vec2::ZERO, 0.0);
        b.body.pos = Vec2::new(x, y);
        b.into()
    }

    #[test]
    fn test_overlap_is_strict() {
        assert!(circles_overlap(Vec2::ZERO, 5.0, Vec2::new(9.0, 0.0), 5.0));
        assert!(!circles_overlap(Vec2::ZERO, 5.0, Vec2::new(10.0, 0.0), 5.0));
    }

    #[test]
    fn test_bullet_destroys_asteroid() {
        let mut rng = SequenceRng::constant(0.5);
        let mut actors = vec![
            bullet_at(100.0, 100.0),
            rock(110.0, 100.0, 10.0),
            rock(500.0, 500.0, 80.0),
        ];
        let out = resolve(&mut actors, &[0], &[1, 2], &mut rng);

        assert!(actors[0].is_deleted());
        assert!(actors[1].is_deleted());
        assert!(!actors[2].is_deleted());
        // Radius 10 is terminal: 10 particles, no children
        assert_eq!(out.spawned.len(), 10);
        assert_eq!(out.events.len(), 1);
    }

    #[test]
    fn test_one_asteroid_hit_by_two_bullets_scores_once() {
        let mut rng = SequenceRng::constant(0.5);
        let mut actors = vec![
            bullet_at(100.0, 100.0),
            bullet_at(102.0, 100.0),
            rock(100.0, 100.0, 40.0),
        ];
        let out = resolve(&mut actors, &[0, 1], &[2], &mut rng);

        assert!(actors.iter().all(Actor::is_deleted));
        let scores = out
            .events
            .iter()
            .filter(|e| matches!(e, GameEvent::AsteroidDestroyed { .. }))
            .count();
        assert_eq!(scores, 1);
        let children = out
            .spawned
            .iter()
            .filter(|a| matches!(a, Actor::Asteroid(_)))
            .count();
        assert_eq!(children, 2);
    }

    #[test]
    fn test_ship_destroyed_before_asteroid() {
        let mut rng = SequenceRng::constant(0.5);
        let mut actors = vec![Ship::new(Vec2::new(400.0, 300.0)).into(), rock(420.0, 300.0, 20.0)];
        let out = resolve(&mut actors, &[0], &[1], &mut rng);
        assert!(matches!(out.events[0], GameEvent::ShipDestroyed { .. }));
        assert!(matches!(out.events[1], GameEvent::AsteroidDestroyed { .. }));
    }

    #[test]
    fn test_empty_group_is_noop() {
        let mut rng = SequenceRng::constant(0.5);
        let mut actors = vec![rock(0.0, 0.0, 80.0)];
        let out = resolve(&mut actors, &[], &[0], &mut rng);
        assert!(out.is_empty());
        assert!(!actors[0].is_deleted());
    }

    fn destroyed_set(actors: &[Actor]) -> BTreeSet<usize> {
        actors
            .iter()
            .enumerate()
            .filter(|(_, a)| a.is_deleted())
            .map(|(i, _)| i)
            .collect()
    }

    proptest! {
        #[test]
        fn prop_resolve_is_symmetric(
            bullets in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0), 0..6),
            rocks in prop::collection::vec((0.0f32..200.0, 0.0f32..200.0, 5.0f32..40.0), 0..6),
        ) {
            let mut actors: Vec<Actor> = bullets.iter().map(|&(x, y)| bullet_at(x, y)).collect();
            actors.extend(rocks.iter().map(|&(x, y, r)| rock(x, y, r)));
            let group_a: Vec<usize> = (0..bullets.len()).collect();
            let group_b: Vec<usize> = (bullets.len()..actors.len()).collect();

            let mut forward = actors.clone();
            let mut backward = actors.clone();
            let mut rng = SequenceRng::constant(0.5);
            resolve(&mut forward, &group_a, &group_b, &mut rng);
            resolve(&mut backward, &group_b, &group_a, &mut rng);

            let forward_set = destroyed_set(&forward);
            prop_assert_eq!(&forward_set, &destroyed_set(&backward));

            // Destroyed iff it overlaps something in the other group
            for (i, actor) in actors.iter().enumerate() {
                let others = if i < bullets.len() { &group_b } else { &group_a };
                let hit = others.iter().any(|&j| {
                    let other = &actors[j];
                    circles_overlap(actor.pos(), actor.radius(), other.pos(), other.radius())
                });
                prop_assert_eq!(hit, forward_set.contains(&i));
            }
        }
    }
}
