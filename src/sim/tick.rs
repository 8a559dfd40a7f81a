//! Per-frame simulation step
//!
//! Core game loop: replenish, collide, prune, evolve, then merge whatever
//! was spawned along the way. One call per animation frame.

use glam::Vec2;

use super::actors::{Actor, ActorKind, Asteroid, Outcome, Ship, TickContext};
use super::collision::resolve;
use super::rng::RandomSource;
use super::state::{GameEvent, GamePhase, GameState};
use crate::highscores::ScoreStore;
use crate::input::{KeyStatus, ScreenBounds};

/// Evolve order; later kinds draw on top
const EVOLVE_ORDER: [ActorKind; 4] = [
    ActorKind::Particle,
    ActorKind::Asteroid,
    ActorKind::Bullet,
    ActorKind::Ship,
];

/// Inputs for a single frame
#[derive(Debug, Clone, Copy)]
pub struct TickInput {
    pub keys: KeyStatus,
    pub bounds: ScreenBounds,
    /// Wall clock (ms) for the fire cooldown
    pub now_ms: f64,
}

impl TickInput {
    pub fn new(keys: KeyStatus, bounds: ScreenBounds, now_ms: f64) -> Self {
        Self {
            keys,
            bounds,
            now_ms,
        }
    }
}

/// Begin a new game: one ship at the centre plus the opening wave
pub fn start_game(
    state: &mut GameState,
    bounds: &ScreenBounds,
    rng: &mut impl RandomSource,
) -> Vec<GameEvent> {
    state.clear_actors();
    state.phase = GamePhase::Playing;
    state.score = 0;
    state.wave_size = state.tuning.initial_asteroid_count;

    let ship = Ship::centered(bounds);
    let ship_pos = ship.body.pos;
    state.insert(ship);
    spawn_wave(state, bounds, ship_pos, rng);

    log::info!(
        "Game started: {} asteroids on {}x{}",
        state.wave_size,
        bounds.width,
        bounds.height
    );
    vec![GameEvent::GameStarted]
}

/// Advance the simulation by one frame.
///
/// Returns every event applied this frame, in order. Keeps running after
/// the ship dies so explosions play out; replenishment only happens in game.
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    rng: &mut impl RandomSource,
    store: &mut impl ScoreStore,
) -> Vec<GameEvent> {
    state.frame += 1;
    let mut events = Vec::new();

    // Replenish
    if state.in_game() && state.count(ActorKind::Asteroid) == 0 {
        state.wave_size += 1;
        let ship_pos = state
            .ship()
            .map(|s| s.body.pos)
            .unwrap_or_else(|| input.bounds.center());
        spawn_wave(state, &input.bounds, ship_pos, rng);
        log::info!("Wave cleared, spawning {} asteroids", state.wave_size);
        events.push(GameEvent::WaveStarted {
            asteroids: state.wave_size,
        });
    }

    // Collide: bullets against asteroids, then the ship
    let bullets = state.indices_of(ActorKind::Bullet);
    let asteroids = state.indices_of(ActorKind::Asteroid);
    let ships = state.indices_of(ActorKind::Ship);

    let hits = resolve(state.actors_mut(), &bullets, &asteroids, rng);
    apply(state, hits, store, &mut events);
    let hits = resolve(state.actors_mut(), &ships, &asteroids, rng);
    apply(state, hits, store, &mut events);

    // Prune
    state.prune();

    // Evolve
    let ctx = TickContext {
        fire_cooldown_ms: state.tuning.fire_cooldown_ms,
        ..TickContext::new(input.bounds, input.keys, input.now_ms)
    };
    let mut evolved = Outcome::default();
    for kind in EVOLVE_ORDER {
        for actor in state.actors_mut().iter_mut().filter(|a| a.kind() == kind) {
            evolved.merge(actor.evolve(&ctx, rng));
        }
    }
    apply(state, evolved, store, &mut events);

    state.merge_pending();
    events
}

/// Spawn `state.wave_size` full-size asteroids away from `ship_pos`
fn spawn_wave(
    state: &mut GameState,
    bounds: &ScreenBounds,
    ship_pos: Vec2,
    rng: &mut impl RandomSource,
) {
    if let Err(e) = state.tuning.fits(bounds) {
        log::warn!("{}; wave asteroids will bunch at the screen edges", e);
    }
    let clearance = state.tuning.spawn_clearance;
    let radius = state.tuning.wave_asteroid_radius;
    for _ in 0..state.wave_size {
        let x = rng.between_excluding(
            0.0,
            bounds.width,
            ship_pos.x - clearance,
            ship_pos.x + clearance,
        );
        let y = rng.between_excluding(
            0.0,
            bounds.height,
            ship_pos.y - clearance,
            ship_pos.y + clearance,
        );
        let asteroid = Asteroid::new(Vec2::new(x, y), radius, rng);
        state.insert(asteroid);
    }
}

/// Queue spawned actors and apply events in emission order
fn apply(
    state: &mut GameState,
    outcome: Outcome,
    store: &mut impl ScoreStore,
    events: &mut Vec<GameEvent>,
) {
    state.register(outcome.spawned);
    for event in outcome.events {
        if let GameEvent::AsteroidDestroyed { points, .. } = event {
            state.increment_score(points);
        }
        let ship_died = matches!(event, GameEvent::ShipDestroyed { .. });
        events.push(event);
        if ship_died {
            events.extend(end_game(state, store));
        }
    }
}

/// Leave the in-game phase and persist a new top score
fn end_game(state: &mut GameState, store: &mut impl ScoreStore) -> Option<GameEvent> {
    if !state.in_game() {
        return None;
    }
    state.phase = GamePhase::GameOver;

    let new_record = state.score > state.top_score;
    if new_record {
        state.top_score = state.score;
        store.write(state.top_score);
        log::info!("New top score: {}", state.top_score);
    }
    log::info!("Game over with score {}", state.score);

    Some(GameEvent::GameOver {
        score: state.score,
        top_score: state.top_score,
        new_record,
    })
}

/// Whether any live actor is of the given kind
pub fn any_live(state: &GameState, kind: ActorKind) -> bool {
    state.live(kind).next().is_some()
}

/// Live actors sorted back to front for drawing
pub fn draw_order(state: &GameState) -> Vec<&Actor> {
    let mut actors: Vec<&Actor> = state
        .actors()
        .iter()
        .filter(|a| !a.is_deleted())
        .collect();
    actors.sort_by_key(|a| a.kind());
    actors
}
