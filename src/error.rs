//! Error types for the I/O edges
//!
//! The simulation itself cannot fail. Only loading and saving (the score
//! file and tuning overrides) report errors, and callers usually log them
//! and fall back to defaults.

use std::fmt;
use std::path::PathBuf;

/// Failure reading or writing persisted data
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem access failed
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// File exists but is not valid JSON for the expected type
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Browser storage is unavailable (private mode, no window)
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {}", path.display(), source),
            Self::Parse { path, source } => {
                write!(f, "{}: invalid JSON: {}", path.display(), source)
            }
            Self::Unavailable => write!(f, "storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Unavailable => None,
        }
    }
}

/// A tuning value outside its usable range
#[derive(Debug, Clone, PartialEq)]
pub struct TuningError {
    pub field: &'static str,
    pub value: f64,
    pub reason: &'static str,
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "tuning.{} = {}: {}", self.field, self.value, self.reason)
    }
}

impl std::error::Error for TuningError {}

/// Anything that can go wrong loading a tuning file
#[derive(Debug)]
pub enum ConfigError {
    Store(StoreError),
    Invalid(TuningError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Store(e) => write!(f, "{}", e),
            Self::Invalid(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Store(e) => Some(e),
            Self::Invalid(e) => Some(e),
        }
    }
}

impl From<StoreError> for ConfigError {
    fn from(e: StoreError) -> Self {
        Self::Store(e)
    }
}

impl From<TuningError> for ConfigError {
    fn from(e: TuningError) -> Self {
        Self::Invalid(e)
    }
}
