//! Crate-level error types.

use std::fmt;

use crate::scene::SceneLoadError;

/// Errors produced by the vantage crate.
///
/// Only failures that abort initialization surface here. Frame and search
/// failures are absorbed where they happen and never reach the caller.
#[derive(Debug)]
pub enum VantageError {
    /// The scene could not be loaded; no render loop was started.
    SceneLoad(SceneLoadError),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Generic I/O failure.
    Io(std::io::Error),
}

impl fmt::Display for VantageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SceneLoad(e) => write!(f, "scene load error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl std::error::Error for VantageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::SceneLoad(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) => None,
        }
    }
}

impl From<SceneLoadError> for VantageError {
    fn from(e: SceneLoadError) -> Self {
        Self::SceneLoad(e)
    }
}

impl From<std::io::Error> for VantageError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
