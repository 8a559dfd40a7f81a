//! Draw data for an external renderer
//!
//! The simulation does not draw. Each frame it can describe every live
//! actor as a [`DrawItem`], back to front, in logical pixels.

use glam::Vec2;
use serde::Serialize;

use crate::sim::actors::{Actor, ActorKind};
use crate::sim::geometry::SHIP_OUTLINE;
use crate::sim::{GameState, draw_order};

/// Shape to draw at an actor's position
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Shape {
    /// Filled circle of the actor's radius
    Dot,
    /// Closed outline, offsets rotated by `DrawItem::rotation`
    Polygon(Vec<Vec2>),
}

/// One actor, ready to draw
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawItem {
    pub id: u32,
    pub kind: ActorKind,
    pub pos: Vec2,
    /// Degrees; 0 for unrotated shapes
    pub rotation: f32,
    pub radius: f32,
    pub shape: Shape,
}

impl DrawItem {
    pub fn from_actor(actor: &Actor) -> Self {
        let shape = match actor {
            Actor::Ship(_) => Shape::Polygon(SHIP_OUTLINE.to_vec()),
            Actor::Asteroid(a) => Shape::Polygon(a.vertices.clone()),
            Actor::Bullet(_) | Actor::Particle(_) => Shape::Dot,
        };
        Self {
            id: actor.id(),
            kind: actor.kind(),
            pos: actor.pos(),
            rotation: actor.rotation().unwrap_or(0.0),
            radius: actor.radius(),
            shape,
        }
    }
}

/// Everything a renderer needs for one frame
pub fn frame(state: &GameState) -> Vec<DrawItem> {
    draw_order(state)
        .into_iter()
        .map(DrawItem::from_actor)
        .collect()
}
