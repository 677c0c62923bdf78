use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable game-level errors. The hosting layer is expected to
/// surface these to the player and re-prompt; none are fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum GameError {
    #[error("unknown category: {category}")]
    UnknownCategory { category: String },
    #[error("no game is active")]
    NoActiveGame,
    #[error("no hints remaining for this word")]
    NoHintsRemaining,
}
