//! A running game bound to its platform services
//!
//! [`Session`] owns everything one frame loop needs: state, RNG, score
//! store, held keys, screen size and audio. Hosts feed it key events and
//! timestamps; the native driver and the browser bindings both sit on top.

use crate::audio::{AudioDirector, AudioSink};
use crate::highscores::ScoreStore;
use crate::input::{Key, KeyStatus, ScreenBounds};
use crate::sim::{
    GameEvent, GameRng, GameState, RandomSource, Scoreboard, TickInput, start_game, tick,
};
use crate::tuning::Tuning;

pub struct Session<S: ScoreStore, A: AudioSink, R: RandomSource = GameRng> {
    state: GameState,
    rng: R,
    store: S,
    keys: KeyStatus,
    bounds: ScreenBounds,
    audio: AudioDirector<A>,
}

impl<S: ScoreStore, A: AudioSink, R: RandomSource> Session<S, A, R> {
    /// Idle session; the top score is read from `store` once, here
    pub fn new(tuning: Tuning, store: S, sink: A, rng: R, bounds: ScreenBounds) -> Self {
        Self {
            state: GameState::with_store(tuning, &store),
            rng,
            store,
            keys: KeyStatus::default(),
            bounds,
            audio: AudioDirector::new(sink),
        }
    }

    /// Start (or restart) a game
    pub fn start(&mut self) -> Vec<GameEvent> {
        let events = start_game(&mut self.state, &self.bounds, &mut self.rng);
        self.audio.handle(&events);
        events
    }

    /// Advance one frame at wall-clock `now_ms`
    pub fn step(&mut self, now_ms: f64) -> Vec<GameEvent> {
        let input = TickInput::new(self.keys, self.bounds, now_ms);
        let events = tick(&mut self.state, &input, &mut self.rng, &mut self.store);
        self.audio.handle(&events);
        events
    }

    /// Track a key event by DOM code; returns whether the key is bound
    pub fn key(&mut self, code: &str, pressed: bool) -> bool {
        match Key::from_code(code) {
            Some(key) => {
                self.keys.apply(key, pressed);
                true
            }
            None => false,
        }
    }

    /// Replace the held keys wholesale
    pub fn set_keys(&mut self, keys: KeyStatus) {
        self.keys = keys;
    }

    pub fn keys(&self) -> KeyStatus {
        self.keys
    }

    pub fn resize(&mut self, bounds: ScreenBounds) {
        log::info!("Resized to {}x{}", bounds.width, bounds.height);
        self.bounds = bounds;
    }

    pub fn bounds(&self) -> ScreenBounds {
        self.bounds
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn scoreboard(&self) -> Scoreboard {
        self.state.scoreboard()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn audio(&self) -> &AudioDirector<A> {
        &self.audio
    }

    pub fn audio_mut(&mut self) -> &mut AudioDirector<A> {
        &mut self.audio
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::{CueQueue, MusicTrack, SoundEffect};
    use crate::highscores::MemoryStore;
    use crate::sim::{ActorKind, GamePhase, SequenceRng};

    /// Wave asteroids land at (80, 60), well away from the ship
    fn session(top_score: u64) -> Session<MemoryStore, CueQueue, SequenceRng> {
        Session::new(
            Tuning::default(),
            MemoryStore::new(top_score),
            CueQueue::default(),
            SequenceRng::new(vec![0.5, 0.1]),
            ScreenBounds::new(800.0, 600.0),
        )
    }

    #[test]
    fn test_top_score_read_on_creation() {
        let s = session(120);
        assert_eq!(s.scoreboard().top_score, 120);
        assert_eq!(s.state().phase, GamePhase::Ready);
    }

    #[test]
    fn test_start_plays_main_theme() {
        let mut s = session(0);
        assert_eq!(s.start(), vec![GameEvent::GameStarted]);
        assert_eq!(s.audio().current_track(), Some(MusicTrack::Main));
        assert_eq!(s.state().count(ActorKind::Ship), 1);
    }

    #[test]
    fn test_key_codes_drive_the_ship() {
        let mut s = session(0);
        s.start();
        assert!(s.key("Space", true));
        assert!(!s.key("Enter", true));
        assert!(s.keys().space);

        let events = s.step(0.0);
        assert!(events.contains(&GameEvent::Shot));
        assert_eq!(s.audio_mut().sink_mut().drain(), vec![SoundEffect::Shoot]);
        assert_eq!(s.state().count(ActorKind::Bullet), 1);

        s.key("Space", false);
        s.step(1000.0);
        assert!(s.audio_mut().sink_mut().drain().is_empty());
    }

    #[test]
    fn test_muted_session_queues_nothing() {
        let mut s = session(0);
        s.start();
        s.audio_mut().set_muted(true);
        s.set_keys(KeyStatus {
            space: true,
            up: true,
            ..Default::default()
        });
        s.step(0.0);
        assert!(s.audio_mut().sink_mut().drain().is_empty());
    }

    #[test]
    fn test_resize_applies_to_next_frame() {
        let mut s = session(0);
        s.start();
        s.resize(ScreenBounds::with_ratio(400.0, 300.0, 2.0));
        assert_eq!(s.bounds().physical_size(), (800, 600));
        s.step(0.0);
        assert!(s.state().frame > 0);
    }
}
