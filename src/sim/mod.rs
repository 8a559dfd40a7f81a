//! Actor simulation module
//!
//! All gameplay logic lives here:
//! - One `tick` per animation frame, no suspension mid-frame
//! - Randomness only through an injectable `RandomSource`
//! - Actors report spawns and events; the orchestrator applies them
//! - No rendering or platform dependencies

pub mod actors;
pub mod collision;
pub mod geometry;
pub mod rng;
pub mod state;
pub mod tick;

pub use actors::{Actor, ActorKind, Asteroid, Bullet, Outcome, Particle, Ship, TickContext};
pub use collision::{circles_overlap, find_hits, resolve};
pub use rng::{GameRng, RandomSource, SequenceRng};
pub use state::{GameEvent, GameOverVerdict, GamePhase, GameState, Scoreboard};
pub use tick::{TickInput, any_live, draw_order, start_game, tick};
