//! Browser bindings
//!
//! The page owns the canvas and the `requestAnimationFrame` loop. It
//! forwards key events, calls [`WebGame::tick`] once per frame, draws the
//! JSON frame and plays the drained sound cues.

use wasm_bindgen::prelude::*;

use crate::audio::CueQueue;
use crate::highscores::LocalStorageStore;
use crate::input::ScreenBounds;
use crate::platform::now_ms;
use crate::render;
use crate::session::Session;
use crate::sim::GameRng;
use crate::tuning::Tuning;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);
    log::info!("Asteroids (web) loaded");
}

/// Game handle owned by the page
#[wasm_bindgen]
pub struct WebGame {
    session: Session<LocalStorageStore, CueQueue>,
}

#[wasm_bindgen]
impl WebGame {
    #[wasm_bindgen(constructor)]
    pub fn new(width: f32, height: f32, ratio: f32) -> WebGame {
        WebGame {
            session: Session::new(
                Tuning::default(),
                LocalStorageStore,
                CueQueue::default(),
                GameRng::from_entropy(),
                ScreenBounds::with_ratio(width, height, ratio),
            ),
        }
    }

    /// Start or restart ("try again")
    pub fn start(&mut self) {
        self.session.start();
    }

    pub fn tick(&mut self) {
        self.session.step(now_ms());
    }

    /// Returns true when the key is bound, so the page can `preventDefault`
    pub fn key(&mut self, code: &str, pressed: bool) -> bool {
        self.session.key(code, pressed)
    }

    pub fn resize(&mut self, width: f32, height: f32, ratio: f32) {
        self.session.resize(ScreenBounds::with_ratio(width, height, ratio));
    }

    /// Canvas backing-store width in device pixels
    pub fn canvas_width(&self) -> u32 {
        self.session.bounds().physical_size().0
    }

    pub fn canvas_height(&self) -> u32 {
        self.session.bounds().physical_size().1
    }

    pub fn set_muted(&mut self, muted: bool) {
        self.session.audio_mut().set_muted(muted);
    }

    pub fn in_game(&self) -> bool {
        self.session.state().in_game()
    }

    /// Draw list for this frame as JSON
    pub fn frame_json(&self) -> String {
        to_json(&render::frame(self.session.state()))
    }

    /// Scores and the game-over verdict as JSON
    pub fn scoreboard_json(&self) -> String {
        to_json(&self.session.scoreboard())
    }

    /// Game-over headline, empty while playing
    pub fn verdict_message(&self) -> String {
        self.session
            .scoreboard()
            .verdict
            .map(|v| v.message())
            .unwrap_or_default()
    }

    /// Sound effect names queued since the last call
    pub fn take_sounds(&mut self) -> Vec<String> {
        self.session
            .audio_mut()
            .sink_mut()
            .drain()
            .into_iter()
            .map(|effect| effect.name().to_string())
            .collect()
    }

    /// Background track that should be looping, if any
    pub fn music(&self) -> Option<String> {
        self.session
            .audio()
            .current_track()
            .map(|track| track.name().to_string())
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    match serde_json::to_string(value) {
        Ok(json) => json,
        Err(e) => {
            log::error!("Could not encode for the page: {}", e);
            String::new()
        }
    }
}
