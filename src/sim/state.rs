//! Game state and core simulation types
//!
//! The orchestrator owns a single live-actor collection. Actors spawned
//! during a frame wait in a pending queue and join the collection only
//! after the frame's collision sweep and evolve pass are complete.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::actors::{Actor, ActorKind, Ship};
use crate::highscores::ScoreStore;
use crate::tuning::Tuning;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GamePhase {
    /// Before the first game
    #[default]
    Ready,
    /// Ship alive, scoring enabled
    Playing,
    /// Ship destroyed; remaining actors keep animating
    GameOver,
}

/// Something that happened during a frame, for scoring, audio, and UI
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    GameStarted,
    /// Asteroid field was empty and a new wave was spawned
    WaveStarted { asteroids: u32 },
    /// Ship fired a bullet
    Shot,
    /// Ship engine fired this tick
    Thrust,
    AsteroidDestroyed { pos: Vec2, radius: f32, points: u32 },
    ShipDestroyed { pos: Vec2 },
    /// Final result, emitted once per game right after the ship dies
    GameOver {
        score: u64,
        top_score: u64,
        new_record: bool,
    },
}

/// Headline for the game-over screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOverVerdict {
    NoPoints,
    /// Matched or beat the best score
    TopScore(u64),
    Points(u64),
}

impl GameOverVerdict {
    /// Judge a finished game. `top_score` is the best score after the game
    /// was recorded, so a new record compares equal.
    pub fn judge(score: u64, top_score: u64) -> Self {
        if score == 0 {
            GameOverVerdict::NoPoints
        } else if score >= top_score {
            GameOverVerdict::TopScore(score)
        } else {
            GameOverVerdict::Points(score)
        }
    }

    pub fn message(&self) -> String {
        match self {
            GameOverVerdict::NoPoints => "0 points... So sad.".to_string(),
            GameOverVerdict::TopScore(score) => format!("Top score with {} points. Woo!", score),
            GameOverVerdict::Points(score) => format!("{} Points though :)", score),
        }
    }
}

/// Score display data for an external HUD
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    pub score: u64,
    pub top_score: u64,
    pub in_game: bool,
    /// Asteroids in the most recent wave
    pub wave_size: u32,
    /// Set once a game has ended
    pub verdict: Option<GameOverVerdict>,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameState {
    pub phase: GamePhase,
    /// Score for the current (or last) game
    pub score: u64,
    /// Best score so far, seeded from the score store
    pub top_score: u64,
    /// Asteroids spawned by the latest wave; grows by one per wave
    pub wave_size: u32,
    /// Frames advanced since construction
    pub frame: u64,
    pub tuning: Tuning,
    /// Live actors in insertion order
    actors: Vec<Actor>,
    /// Spawned this frame, merged after the evolve pass
    pending: Vec<Actor>,
    next_id: u32,
}

impl GameState {
    pub fn new(tuning: Tuning, top_score: u64) -> Self {
        Self {
            phase: GamePhase::Ready,
            score: 0,
            top_score,
            wave_size: tuning.initial_asteroid_count,
            frame: 0,
            tuning,
            actors: Vec::new(),
            pending: Vec::new(),
            next_id: 1,
        }
    }

    /// Fresh state whose top score comes from `store`
    pub fn with_store(tuning: Tuning, store: &impl ScoreStore) -> Self {
        Self::new(tuning, store.read())
    }

    pub fn in_game(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    /// Add points, ignored unless a game is in progress
    pub fn increment_score(&mut self, points: u32) {
        if !self.in_game() {
            return;
        }
        self.score += u64::from(points);
    }

    pub fn scoreboard(&self) -> Scoreboard {
        Scoreboard {
            score: self.score,
            top_score: self.top_score,
            in_game: self.in_game(),
            wave_size: self.wave_size,
            verdict: (self.phase == GamePhase::GameOver)
                .then(|| GameOverVerdict::judge(self.score, self.top_score)),
        }
    }

    /// Allocate a new entity ID
    pub fn next_entity_id(&mut self) -> u32 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    /// Live actors, including any deleted since the last prune
    pub fn actors(&self) -> &[Actor] {
        &self.actors
    }

    pub(crate) fn actors_mut(&mut self) -> &mut [Actor] {
        &mut self.actors
    }

    /// Live, not-deleted actors of one kind
    pub fn live(&self, kind: ActorKind) -> impl Iterator<Item = &Actor> {
        self.actors
            .iter()
            .filter(move |a| a.kind() == kind && !a.is_deleted())
    }

    pub fn count(&self, kind: ActorKind) -> usize {
        self.live(kind).count()
    }

    /// Collection indices of actors of one kind, deleted or not
    pub fn indices_of(&self, kind: ActorKind) -> Vec<usize> {
        self.actors
            .iter()
            .enumerate()
            .filter(|(_, a)| a.kind() == kind)
            .map(|(i, _)| i)
            .collect()
    }

    pub fn ship(&self) -> Option<&Ship> {
        self.actors.iter().find_map(|a| match a {
            Actor::Ship(ship) if !ship.body.deleted => Some(ship),
            _ => None,
        })
    }

    /// Insert an actor into the live collection immediately
    pub fn insert(&mut self, actor: impl Into<Actor>) {
        let mut actor = actor.into();
        actor.body_mut().id = self.next_entity_id();
        self.actors.push(actor);
    }

    /// Queue actors to join after the current pass
    pub fn register(&mut self, spawned: impl IntoIterator<Item = Actor>) {
        self.pending.extend(spawned);
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// Move queued actors into the live collection
    pub fn merge_pending(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        for actor in pending {
            self.insert(actor);
        }
    }

    /// Drop every deleted actor
    pub fn prune(&mut self) {
        self.actors.retain(|a| !a.is_deleted());
    }

    /// Remove all actors, live and queued
    pub fn clear_actors(&mut self) {
        self.actors.clear();
        self.pending.clear();
    }
}
