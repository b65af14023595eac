//! The game state machine: roster management, life adjustment, defeat
//! detection, and the change history.
//!
//! ## Started-state derivation
//!
//! "Started" is a derived view, not stored truth: the game counts as
//! started while any life total differs from `STARTING_LIFE`. The check is
//! recomputed on every read rather than latched, so driving every total
//! back to exactly 20 returns the game to the not-started state and
//! re-opens the roster. Callers that want a one-way transition must build
//! it themselves.
//!
//! ## Ownership
//!
//! A `Game` is exclusively owned by its single control thread; `&mut self`
//! on every mutator is the whole synchronization story. Multi-client
//! access would need a single-writer lock or command queue in front.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, trace};

use super::error::{GameError, Result};
use super::history::{HistoryEntry, HistoryLog};
use super::player::{Player, PlayerId};

/// Maximum roster size.
pub const MAX_PLAYERS: usize = 8;

/// Minimum roster size.
pub const MIN_PLAYERS: usize = 1;

/// Result of a defeat scan over the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Nobody has lost yet.
    InProgress,
    /// Somebody has lost. Only the first defeated player by roster order
    /// is reported, even if several are defeated at once.
    PlayerLost { name: String },
}

impl GameStatus {
    /// Whether a loss condition is active.
    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::PlayerLost { .. })
    }
}

impl std::fmt::Display for GameStatus {
    /// Renders `"{name} LOSES!"`, or the empty string while nobody has
    /// lost.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameStatus::InProgress => Ok(()),
            GameStatus::PlayerLost { name } => write!(f, "{} LOSES!", name),
        }
    }
}

/// A running game: the ordered roster plus the change history.
///
/// Players join in slot order and are never removed or reordered, so a
/// [`PlayerId`] handed out for a slot stays valid for the life of the
/// game.
///
/// ```
/// use life_tracker::{Game, PlayerId};
///
/// let mut game = Game::new(2)?;
/// game.adjust_player_life(PlayerId::new(0), -5)?;
///
/// assert_eq!(game.player(PlayerId::new(0)).unwrap().life(), 15);
/// assert!(game.is_started());
/// assert_eq!(game.history().len(), 1);
/// # Ok::<(), life_tracker::GameError>(())
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Game {
    /// Roster in join order. Capped at `MAX_PLAYERS`, so the inline
    /// capacity never spills to the heap.
    players: SmallVec<[Player; MAX_PLAYERS]>,
    history: HistoryLog,
}

impl Game {
    /// Create a game with `player_count` default-named players at the
    /// starting life total.
    ///
    /// Fails with [`GameError::InvalidPlayerCount`] outside
    /// `MIN_PLAYERS..=MAX_PLAYERS`.
    pub fn new(player_count: usize) -> Result<Self> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_count) {
            return Err(GameError::InvalidPlayerCount {
                requested: player_count,
            });
        }

        debug!(player_count, "game created");
        Ok(Self {
            players: PlayerId::all(player_count).map(Player::for_slot).collect(),
            history: HistoryLog::new(),
        })
    }

    /// Number of seated players.
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.len()
    }

    /// The roster in join order.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by roster slot.
    #[must_use]
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.get(id.index())
    }

    /// The change history, oldest first.
    #[must_use]
    pub fn history(&self) -> &HistoryLog {
        &self.history
    }

    /// Whether any life total has diverged from the starting value.
    ///
    /// Recomputed from the roster on every call; see the module docs for
    /// the resulting non-monotonic behavior.
    #[must_use]
    pub fn is_started(&self) -> bool {
        let started = self.players.iter().any(|p| !p.at_starting_life());
        trace!(started, "derived started state");
        started
    }

    /// Whether a player may join: roster below capacity and game not
    /// started.
    ///
    /// [`Game::add_player`] uses this exact predicate as its guard, so a
    /// presentation layer that pre-disables its control on this answer
    /// never disagrees with the mutation.
    #[must_use]
    pub fn can_add_player(&self) -> bool {
        self.players.len() < MAX_PLAYERS && !self.is_started()
    }

    /// Try to seat another player.
    ///
    /// On success appends a player named with the new roster count
    /// (`"Player 3"` joins a 2-player roster) and returns true. Returns
    /// false without mutating anything when the roster is full or the
    /// game has started; that outcome is routine, not an error.
    pub fn add_player(&mut self) -> bool {
        if !self.can_add_player() {
            return false;
        }

        let player = Player::for_slot(PlayerId::new(self.players.len() as u8));
        debug!(name = %player.name(), "player joined");
        self.players.push(player);
        true
    }

    /// Apply a life change to one player.
    ///
    /// A nonzero delta is recorded in the history first, carrying the
    /// player's current name and the exact delta, then applied with
    /// clamping. A zero delta changes nothing and records nothing.
    ///
    /// Fails with [`GameError::UnknownPlayer`], touching no state, when
    /// `id` does not address a seated player.
    pub fn adjust_player_life(&mut self, id: PlayerId, delta: i32) -> Result<()> {
        let player = self
            .players
            .get_mut(id.index())
            .ok_or(GameError::UnknownPlayer { id })?;

        if delta != 0 {
            self.history.record(HistoryEntry::new(player.name(), delta));
        }
        player.adjust_life(delta);
        debug!(player = %player.name(), delta, life = player.life(), "life adjusted");
        Ok(())
    }

    /// Scan the roster for a loss.
    ///
    /// The first defeated player by roster order wins the tie-break;
    /// later defeats are not reported.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        match self.players.iter().find(|p| p.is_defeated()) {
            Some(player) => GameStatus::PlayerLost {
                name: player.name().to_string(),
            },
            None => GameStatus::InProgress,
        }
    }

    /// Status rendered for display: `"{name} LOSES!"`, or an empty string
    /// while nobody has lost.
    #[must_use]
    pub fn check_game_status(&self) -> String {
        self.status().to_string()
    }
}

impl Default for Game {
    /// Two players, the standard table setup.
    fn default() -> Self {
        Self {
            players: PlayerId::all(2).map(Player::for_slot).collect(),
            history: HistoryLog::new(),
        }
    }
}
