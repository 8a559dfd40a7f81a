//! Data-driven game balance
//!
//! Orchestrator-level knobs, loadable from a JSON file. Any field left out
//! of the file keeps its default.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::*;
use crate::error::{ConfigError, StoreError, TuningError};
use crate::input::ScreenBounds;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Asteroids in the opening wave; each later wave adds one
    pub initial_asteroid_count: u32,
    /// Radius of freshly spawned wave asteroids
    pub wave_asteroid_radius: f32,
    /// Half-width of the per-axis no-spawn window around the ship
    pub spawn_clearance: f32,
    /// Minimum time between shots
    pub fire_cooldown_ms: f64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            initial_asteroid_count: INITIAL_ASTEROID_COUNT,
            wave_asteroid_radius: ASTEROID_WAVE_RADIUS,
            spawn_clearance: SPAWN_CLEARANCE,
            fire_cooldown_ms: FIRE_COOLDOWN_MS,
        }
    }
}

impl Tuning {
    /// Parse and validate a JSON document
    pub fn from_json(json: &str, origin: &Path) -> Result<Self, ConfigError> {
        let tuning: Tuning = serde_json::from_str(json).map_err(|source| StoreError::Parse {
            path: origin.to_path_buf(),
            source,
        })?;
        tuning.validate()?;
        Ok(tuning)
    }

    /// Load from `path`; a missing file yields the defaults
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let tuning = Self::from_json(&json, path)?;
                log::info!("Loaded tuning from {}", path.display());
                Ok(tuning)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No tuning file at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
            .into()),
        }
    }

    pub fn validate(&self) -> Result<(), TuningError> {
        if self.initial_asteroid_count == 0 {
            return Err(TuningError {
                field: "initial_asteroid_count",
                value: 0.0,
                reason: "must spawn at least one asteroid",
            });
        }
        if !(self.wave_asteroid_radius > 0.0) {
            return Err(TuningError {
                field: "wave_asteroid_radius",
                value: f64::from(self.wave_asteroid_radius),
                reason: "must be positive",
            });
        }
        if !(self.spawn_clearance >= 0.0) {
            return Err(TuningError {
                field: "spawn_clearance",
                value: f64::from(self.spawn_clearance),
                reason: "must not be negative",
            });
        }
        if !(self.fire_cooldown_ms >= 0.0) {
            return Err(TuningError {
                field: "fire_cooldown_ms",
                value: self.fire_cooldown_ms,
                reason: "must not be negative",
            });
        }
        Ok(())
    }

    /// Check the no-spawn window against a screen. A window spanning an
    /// axis leaves wave asteroids only the edge of that axis.
    pub fn fits(&self, bounds: &ScreenBounds) -> Result<(), TuningError> {
        let shortest = bounds.width.min(bounds.height);
        if 2.0 * self.spawn_clearance >= shortest {
            return Err(TuningError {
                field: "spawn_clearance",
                value: f64::from(self.spawn_clearance),
                reason: "no-spawn window covers the screen",
            });
        }
        Ok(())
    }
}
