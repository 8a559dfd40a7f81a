//! Sound cues
//!
//! The simulation reports [`GameEvent`]s; [`AudioDirector`] turns them into
//! fire-and-forget cues for whatever [`AudioSink`] the platform provides.

use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundEffect {
    /// Bullet fired
    Shoot,
    /// Asteroid destroyed
    Hit,
    /// Ship destroyed
    Die,
    /// Engine burn (one per thrust tick)
    Thrust,
}

impl SoundEffect {
    /// Asset name the host plays
    pub fn name(self) -> &'static str {
        match self {
            SoundEffect::Shoot => "shoot",
            SoundEffect::Hit => "hit",
            SoundEffect::Die => "die",
            SoundEffect::Thrust => "thrust",
        }
    }
}

/// Looping background tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MusicTrack {
    Main,
    GameOver,
}

impl MusicTrack {
    pub fn name(self) -> &'static str {
        match self {
            MusicTrack::Main => "main",
            MusicTrack::GameOver => "gameover",
        }
    }
}

/// Platform audio output
pub trait AudioSink {
    fn play(&mut self, effect: SoundEffect);
    /// Stop whatever loops and start `track`
    fn switch_music(&mut self, track: MusicTrack);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Clone, Default)]
pub struct LogSink;

impl AudioSink for LogSink {
    fn play(&mut self, effect: SoundEffect) {
        log::debug!("sfx: {:?}", effect);
    }

    fn switch_music(&mut self, track: MusicTrack) {
        log::debug!("music: {:?}", track);
    }
}

/// Sink that buffers cues for a host to drain once per frame
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    effects: Vec<SoundEffect>,
}

impl CueQueue {
    /// Effects queued since the last drain, oldest first
    pub fn drain(&mut self) -> Vec<SoundEffect> {
        std::mem::take(&mut self.effects)
    }
}

impl AudioSink for CueQueue {
    fn play(&mut self, effect: SoundEffect) {
        self.effects.push(effect);
    }

    fn switch_music(&mut self, track: MusicTrack) {
        log::debug!("music: {:?}", track);
    }
}

/// Routes simulation events to an audio sink
#[derive(Debug)]
pub struct AudioDirector<S: AudioSink> {
    sink: S,
    current_track: Option<MusicTrack>,
    muted: bool,
}

impl<S: AudioSink> AudioDirector<S> {
    pub fn new(sink: S) -> Self {
        Self {
            sink,
            current_track: None,
            muted: false,
        }
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// Mute/unmute effects (music switching still tracks state)
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    pub fn current_track(&self) -> Option<MusicTrack> {
        self.current_track
    }

    /// Switch tracks; asking for the track already playing does nothing
    pub fn play_music(&mut self, track: MusicTrack) {
        if self.current_track == Some(track) {
            return;
        }
        self.current_track = Some(track);
        self.sink.switch_music(track);
    }

    fn play(&mut self, effect: SoundEffect) {
        if !self.muted {
            self.sink.play(effect);
        }
    }

    /// React to one frame's events, in order
    pub fn handle(&mut self, events: &[GameEvent]) {
        for event in events {
            match event {
                GameEvent::GameStarted => self.play_music(MusicTrack::Main),
                GameEvent::Shot => self.play(SoundEffect::Shoot),
                GameEvent::Thrust => self.play(SoundEffect::Thrust),
                GameEvent::AsteroidDestroyed { .. } => self.play(SoundEffect::Hit),
                GameEvent::ShipDestroyed { .. } => self.play(SoundEffect::Die),
                GameEvent::GameOver { .. } => self.play_music(MusicTrack::GameOver),
                GameEvent::WaveStarted { .. } => {}
            }
        }
    }
}
