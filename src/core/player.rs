//! Player identity and life tracking.
//!
//! ## PlayerId
//!
//! Type-safe roster slot identifier. The roster never removes or reorders
//! players, so a `PlayerId` is numerically equal to the player's position
//! in the roster.
//!
//! ## Player
//!
//! A named participant with a bounded life total. Clamping lives in the
//! entity, so an out-of-range total is never observable no matter which
//! collaborator issues the adjustment.

use serde::{Deserialize, Serialize};

/// Life total every new player starts at.
pub const STARTING_LIFE: i32 = 20;

/// Lower bound on a life total.
pub const MIN_LIFE: i32 = 0;

/// Upper bound on a life total.
pub const MAX_LIFE: i32 = 999;

/// Roster slot identifier.
///
/// Slots are 0-based: the first player is `PlayerId(0)`. Display names are
/// 1-based, so slot 0 holds `"Player 1"`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PlayerId(pub u8);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u8) -> Self {
        Self(id)
    }

    /// Get the raw roster index (0-based).
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Iterate over all player IDs for a roster with `player_count` players.
    ///
    /// ```
    /// use life_tracker::PlayerId;
    ///
    /// let ids: Vec<_> = PlayerId::all(4).collect();
    /// assert_eq!(ids.len(), 4);
    /// assert_eq!(ids[0], PlayerId::new(0));
    /// assert_eq!(ids[3], PlayerId::new(3));
    /// ```
    pub fn all(player_count: usize) -> impl Iterator<Item = PlayerId> {
        (0..player_count as u8).map(PlayerId)
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "slot {}", self.0)
    }
}

/// A participant in the game.
///
/// The life total is clamped to `[MIN_LIFE, MAX_LIFE]` on every
/// adjustment; intermediate overshoot is clamped away before it can be
/// observed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    name: String,
    life: i32,
}

impl Player {
    /// Create a player at the starting life total.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            life: STARTING_LIFE,
        }
    }

    /// Create the default-named player for a roster slot.
    ///
    /// ```
    /// use life_tracker::{Player, PlayerId};
    ///
    /// let player = Player::for_slot(PlayerId::new(0));
    /// assert_eq!(player.name(), "Player 1");
    /// assert_eq!(player.life(), 20);
    /// ```
    #[must_use]
    pub fn for_slot(id: PlayerId) -> Self {
        Self::new(format!("Player {}", id.index() + 1))
    }

    /// Get the display name. Names are fixed at creation; there is no
    /// rename operation.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the current life total.
    #[must_use]
    pub fn life(&self) -> i32 {
        self.life
    }

    /// Apply a signed life change, clamping into `[MIN_LIFE, MAX_LIFE]`.
    ///
    /// Any delta is accepted, including zero.
    pub fn adjust_life(&mut self, delta: i32) {
        self.life = self.life.saturating_add(delta).clamp(MIN_LIFE, MAX_LIFE);
    }

    /// Whether this player has lost.
    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.life <= 0
    }

    /// Whether the total still sits at the starting value.
    ///
    /// The game-started derivation is built from this predicate.
    #[must_use]
    pub fn at_starting_life(&self) -> bool {
        self.life == STARTING_LIFE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_id_basics() {
        let p0 = PlayerId::new(0);
        let p2 = PlayerId::new(2);

        assert_eq!(p0.index(), 0);
        assert_eq!(p2.index(), 2);
        assert_eq!(format!("{}", p2), "slot 2");
    }

    #[test]
    fn test_player_id_all() {
        let ids: Vec<_> = PlayerId::all(3).collect();
        assert_eq!(ids, vec![PlayerId::new(0), PlayerId::new(1), PlayerId::new(2)]);
    }

    #[test]
    fn test_new_player_defaults() {
        let player = Player::new("Player 1");

        assert_eq!(player.name(), "Player 1");
        assert_eq!(player.life(), STARTING_LIFE);
        assert!(!player.is_defeated());
        assert!(player.at_starting_life());
    }

    #[test]
    fn test_for_slot_names_are_one_based() {
        assert_eq!(Player::for_slot(PlayerId::new(0)).name(), "Player 1");
        assert_eq!(Player::for_slot(PlayerId::new(7)).name(), "Player 8");
    }

    #[test]
    fn test_adjust_life() {
        let mut player = Player::new("Player 1");

        player.adjust_life(-5);
        assert_eq!(player.life(), 15);

        player.adjust_life(3);
        assert_eq!(player.life(), 18);

        player.adjust_life(0);
        assert_eq!(player.life(), 18);
    }

    #[test]
    fn test_adjust_life_clamps_low() {
        let mut player = Player::new("Player 1");

        player.adjust_life(-100);
        assert_eq!(player.life(), MIN_LIFE);
        assert!(player.is_defeated());

        // Further losses stay at the floor
        player.adjust_life(-1);
        assert_eq!(player.life(), MIN_LIFE);
    }

    #[test]
    fn test_adjust_life_clamps_high() {
        let mut player = Player::new("Player 1");

        player.adjust_life(5000);
        assert_eq!(player.life(), MAX_LIFE);

        player.adjust_life(1);
        assert_eq!(player.life(), MAX_LIFE);
    }

    #[test]
    fn test_adjust_life_extreme_deltas() {
        let mut player = Player::new("Player 1");

        player.adjust_life(i32::MAX);
        assert_eq!(player.life(), MAX_LIFE);

        player.adjust_life(i32::MIN);
        assert_eq!(player.life(), MIN_LIFE);
    }

    #[test]
    fn test_defeat_recovery() {
        let mut player = Player::new("Player 1");

        player.adjust_life(-20);
        assert!(player.is_defeated());

        player.adjust_life(1);
        assert!(!player.is_defeated());
        assert_eq!(player.life(), 1);
    }

    #[test]
    fn test_at_starting_life_tracks_exact_value() {
        let mut player = Player::new("Player 1");
        assert!(player.at_starting_life());

        player.adjust_life(-1);
        assert!(!player.at_starting_life());

        player.adjust_life(1);
        assert!(player.at_starting_life());
    }

    #[test]
    fn test_player_serialization() {
        let mut player = Player::new("Player 2");
        player.adjust_life(-7);

        let json = serde_json::to_string(&player).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(player, deserialized);
    }
}
