//! Append-only record of life changes.
//!
//! Every nonzero adjustment applied through the game produces exactly one
//! [`HistoryEntry`]. Entries are never mutated or removed, so the log
//! doubles as an audit trail for the secondary history view.

use chrono::{DateTime, Utc};
use im::Vector;
use serde::{Deserialize, Serialize};

/// One recorded life change.
///
/// The player name is copied at record time, not held as a live
/// reference; the entry stays accurate even if renames are ever added.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    /// Name of the affected player at the time of the change.
    pub player_name: String,

    /// Signed change. Zero-delta adjustments are never recorded.
    pub life_change: i32,

    /// Instant the change was recorded.
    pub timestamp: DateTime<Utc>,
}

impl HistoryEntry {
    /// Create a new entry stamped with the current instant.
    #[must_use]
    pub fn new(player_name: impl Into<String>, life_change: i32) -> Self {
        Self {
            player_name: player_name.into(),
            life_change,
            timestamp: Utc::now(),
        }
    }
}

impl std::fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:+}", self.player_name, self.life_change)
    }
}

/// Ordered log of every nonzero life change, oldest first.
///
/// Backed by `im::Vector`, so cloning the log for a snapshot is O(1)
/// regardless of how long the game has run.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryLog {
    entries: Vector<HistoryEntry>,
}

impl HistoryLog {
    /// Create an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry.
    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.push_back(entry);
    }

    /// Number of recorded entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Get an entry by position, oldest first.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&HistoryEntry> {
        self.entries.get(index)
    }

    /// Iterate over entries, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_log() {
        let log = HistoryLog::new();

        assert_eq!(log.len(), 0);
        assert!(log.is_empty());
        assert!(log.get(0).is_none());
    }

    #[test]
    fn test_record_preserves_order() {
        let mut log = HistoryLog::new();

        log.record(HistoryEntry::new("Player 1", -5));
        log.record(HistoryEntry::new("Player 2", 3));
        log.record(HistoryEntry::new("Player 1", -1));

        assert_eq!(log.len(), 3);
        assert!(!log.is_empty());

        let changes: Vec<_> = log.iter().map(|e| e.life_change).collect();
        assert_eq!(changes, vec![-5, 3, -1]);

        let entry = log.get(1).unwrap();
        assert_eq!(entry.player_name, "Player 2");
        assert_eq!(entry.life_change, 3);
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(format!("{}", HistoryEntry::new("Player 1", -5)), "Player 1 -5");
        assert_eq!(format!("{}", HistoryEntry::new("Player 3", 12)), "Player 3 +12");
    }

    #[test]
    fn test_entry_keeps_name_copy() {
        let name = String::from("Player 4");
        let entry = HistoryEntry::new(name.clone(), -2);
        drop(name);

        assert_eq!(entry.player_name, "Player 4");
    }

    #[test]
    fn test_log_serialization() {
        let mut log = HistoryLog::new();
        log.record(HistoryEntry::new("Player 1", -5));
        log.record(HistoryEntry::new("Player 2", 7));

        let json = serde_json::to_string(&log).unwrap();
        let deserialized: HistoryLog = serde_json::from_str(&json).unwrap();
        assert_eq!(log, deserialized);
    }
}
