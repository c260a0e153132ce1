//! Error types for trana-nav

use crate::core::Position;
use thiserror::Error;

/// trana-nav error type
///
/// Safety alarms (`Collision`, `RunOver`, `DeadEndTrap`) are raised
/// synchronously at the exact point the unsafe action would occur. All
/// variants are fatal to the current mission; nothing is retried.
#[derive(Error, Debug)]
pub enum TranaError {
    #[error("collision alarm: wall at {0}")]
    Collision(Position),

    #[error("run-over alarm: uncollected occupant at {0}")]
    RunOver(Position),

    #[error("dead-end alarm: carried occupant trapped at {0}")]
    DeadEndTrap(Position),

    #[error("invalid operation: {0}")]
    InvalidOperation(String),

    #[error("explorer stuck at {0}: no traversable heading")]
    Stuck(Position),

    #[error("exploration exhausted after {0} iterations without finding the occupant")]
    ExplorationExhausted(usize),

    #[error("no path home through the known map")]
    NoPathHome,

    #[error("map format error: {0}")]
    MapFormat(String),

    #[error("configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<toml::de::Error> for TranaError {
    fn from(e: toml::de::Error) -> Self {
        TranaError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, TranaError>;
