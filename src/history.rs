//! Append-only ledger of played moves.

use crate::board::Snapshot;

/// A played move: the board it produced and its notation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub snapshot: Snapshot,
    pub notation: String,
}

#[derive(Clone, Debug, Default)]
pub struct History {
    entries: Vec<HistoryEntry>,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        History {
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, snapshot: Snapshot, notation: impl Into<String>) {
        self.entries.push(HistoryEntry {
            snapshot,
            notation: notation.into(),
        });
    }

    /// Pops up to `times` entries and returns them newest first.
    pub fn rollback(&mut self, times: usize) -> Vec<HistoryEntry> {
        let keep = self.entries.len().saturating_sub(times);
        let mut popped = self.entries.split_off(keep);
        popped.reverse();
        popped
    }

    #[must_use]
    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.last()
    }

    /// All entries, oldest first.
    #[must_use]
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Notations of every move, oldest first.
    pub fn notations(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.notation.as_str())
    }
}
