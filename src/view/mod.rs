//! Read-only state for the presentation layer.
//!
//! The renderer holds a snapshot plus the narrow command API on
//! [`Game`]; it never mutates fields directly. Snapshots are plain data
//! and serialize, so they can cross a render boundary by value.

use serde::{Deserialize, Serialize};

use crate::core::game::Game;
use crate::core::player::{Player, PlayerId};

/// One player's observable state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerView {
    /// Roster slot this view was taken from.
    pub id: PlayerId,
    pub name: String,
    pub life: i32,
    pub is_defeated: bool,
}

impl PlayerView {
    fn of(id: PlayerId, player: &Player) -> Self {
        Self {
            id,
            name: player.name().to_string(),
            life: player.life(),
            is_defeated: player.is_defeated(),
        }
    }
}

/// Observable game state at a point in time.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Players in roster order.
    pub players: Vec<PlayerView>,
    /// Whether any life total has diverged from the starting value.
    pub started: bool,
    /// Rendered status line; empty while nobody has lost.
    pub status: String,
}

impl Game {
    /// Capture the observable state for rendering.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            players: self
                .players()
                .iter()
                .enumerate()
                .map(|(i, p)| PlayerView::of(PlayerId::new(i as u8), p))
                .collect(),
            started: self.is_started(),
            status: self.check_game_status(),
        }
    }
}
