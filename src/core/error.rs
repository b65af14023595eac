//! Error types for the life-tracking core.
//!
//! Hard errors mark caller-side bugs and surface immediately. Expected,
//! recoverable outcomes are signaled by return value instead and never
//! appear here: a full roster rejecting a join is `add_player` returning
//! false, and unparseable custom-amount text is `parse_life_delta`
//! returning `None`.

use super::player::PlayerId;

/// Result alias for fallible core operations.
pub type Result<T> = std::result::Result<T, GameError>;

/// Core error taxonomy.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    /// Construction with a roster size outside the supported range.
    #[error("player count {requested} outside supported range 1..=8")]
    InvalidPlayerCount { requested: usize },

    /// Life adjustment addressed at a roster slot that does not exist.
    #[error("no player in {id}")]
    UnknownPlayer { id: PlayerId },
}
