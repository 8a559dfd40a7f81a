//! Platform abstraction layer
//!
//! Handles browser/native differences for wall-clock time. The fire
//! cooldown is measured in real milliseconds, so every frame needs a
//! timestamp from somewhere.

/// Milliseconds since the Unix epoch
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Milliseconds since the Unix epoch
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs_f64() * 1000.0)
        .unwrap_or(0.0)
}

/// Source of per-frame timestamps
#[derive(Debug, Clone)]
pub enum FrameClock {
    /// Wall clock
    Realtime,
    /// Advances a fixed step per frame, starting at zero
    Fixed { step_ms: f64, elapsed_ms: f64 },
}

impl FrameClock {
    /// Fixed-step clock at `hz` frames per second
    pub fn fixed(hz: f64) -> Self {
        FrameClock::Fixed {
            step_ms: 1000.0 / hz,
            elapsed_ms: 0.0,
        }
    }

    /// Timestamp for the next frame
    pub fn next_frame(&mut self) -> f64 {
        match self {
            FrameClock::Realtime => now_ms(),
            FrameClock::Fixed {
                step_ms,
                elapsed_ms,
            } => {
                let now = *elapsed_ms;
                *elapsed_ms += *step_ms;
                now
            }
        }
    }
}
