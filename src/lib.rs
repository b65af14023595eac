//! # life-tracker
//!
//! A turn-agnostic, multiplayer life-tracking engine for tabletop card
//! games.
//!
//! ## Design Principles
//!
//! 1. **State machine only**: the crate owns players, life totals, defeat
//!    detection, and the change history. Rendering, layout, and input
//!    widgets belong to the embedding application.
//!
//! 2. **Invariants live in the entities**: life totals are clamped inside
//!    `Player`, and the roster guard inside `Game` is the same predicate
//!    exposed as `can_add_player`. Callers cannot produce out-of-range
//!    state through the public API.
//!
//! 3. **Derived, not latched**: whether a game has started is recomputed
//!    from the roster on every read. Driving every total back to the
//!    starting value legally re-opens the roster.
//!
//! ## Modules
//!
//! - `core`: players, the game roster, history, errors, input parsing
//! - `view`: read-only snapshots for the presentation layer

pub mod core;
pub mod view;

// Re-export commonly used types
pub use crate::core::{
    parse_life_delta, Game, GameError, GameStatus, HistoryEntry, HistoryLog, Player, PlayerId,
    Result, MAX_LIFE, MAX_PLAYERS, MIN_LIFE, MIN_PLAYERS, STARTING_LIFE,
};

pub use crate::view::{GameSnapshot, PlayerView};
