//! Core state machine: players, the game roster, history, and errors.
//!
//! Everything here is synchronous and single-owner; the presentation
//! layer drives it through the narrow command API and reads state back
//! through accessors or [`crate::view`] snapshots.

pub mod error;
pub mod game;
pub mod history;
pub mod input;
pub mod player;

pub use error::{GameError, Result};
pub use game::{Game, GameStatus, MAX_PLAYERS, MIN_PLAYERS};
pub use history::{HistoryEntry, HistoryLog};
pub use input::parse_life_delta;
pub use player::{Player, PlayerId, MAX_LIFE, MIN_LIFE, STARTING_LIFE};
