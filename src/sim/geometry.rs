//! Actor outlines
//!
//! Shapes are offsets from the actor position, generated once and carried
//! as draw data; physics only ever uses the bounding radius.

use glam::Vec2;

use super::rng::RandomSource;
use crate::degrees_to_radians;

/// Ship hull, nose pointing up (-y) at rotation 0
pub const SHIP_OUTLINE: [Vec2; 5] = [
    Vec2::new(0.0, -15.0),
    Vec2::new(10.0, 10.0),
    Vec2::new(5.0, 7.0),
    Vec2::new(-5.0, 7.0),
    Vec2::new(-10.0, 10.0),
];

/// Maximum per-axis vertex jitter as a fraction of the radius
const VERTEX_JITTER: f32 = 1.0 / 3.0;

/// Generate a lumpy polygon of `count` vertices around a circle of `radius`.
///
/// Vertices are evenly spaced in angle, starting straight up and winding
/// counter-clockwise on screen. Each axis is independently nudged inward,
/// outward, or not at all, by up to a third of the radius.
pub fn asteroid_vertices(count: usize, radius: f32, rng: &mut impl RandomSource) -> Vec<Vec2> {
    let step = 360.0 / count as f32;
    (0..count)
        .map(|i| {
            let theta = degrees_to_radians(step * i as f32);
            let jitter_x = jitter(rng);
            let jitter_y = jitter(rng);
            Vec2::new(-theta.sin() + jitter_x, -theta.cos() + jitter_y) * radius
        })
        .collect()
}

/// One of {-1, 0, 1} times a uniform magnitude, scaled to the jitter cap
fn jitter(rng: &mut impl RandomSource) -> f32 {
    let direction = rng.between(-1.0, 1.0).round();
    direction * rng.next_unit() * VERTEX_JITTER
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::rng::SequenceRng;

    #[test]
    fn test_vertex_count() {
        let mut rng = SequenceRng::new(vec![0.1, 0.9, 0.4]);
        assert_eq!(asteroid_vertices(8, 80.0, &mut rng).len(), 8);
    }

    #[test]
    fn test_unjittered_vertices_lie_on_circle() {
        // between(-1, 1) at 0.5 is 0.0, which rounds to no jitter
        let mut rng = SequenceRng::constant(0.5);
        let verts = asteroid_vertices(8, 40.0, &mut rng);
        for v in &verts {
            assert!((v.length() - 40.0).abs() < 1e-3);
        }
        assert!((verts[0] - Vec2::new(0.0, -40.0)).length() < 1e-3);
    }

    #[test]
    fn test_jitter_is_bounded() {
        let mut rng = SequenceRng::new(vec![0.99, 0.99, 0.01, 0.99, 0.3, 0.7]);
        let radius = 80.0;
        for (i, v) in asteroid_vertices(8, radius, &mut rng).iter().enumerate() {
            let theta = degrees_to_radians(45.0 * i as f32);
            let base = Vec2::new(-theta.sin(), -theta.cos()) * radius;
            let d = *v - base;
            assert!(d.x.abs() <= radius / 3.0 + 1e-3);
            assert!(d.y.abs() <= radius / 3.0 + 1e-3);
        }
    }
}
