//! Single-slot snapshot of the live population.

use crate::grid::{Cell, LiveSet};
use std::collections::HashSet;

/// Holds at most one saved population. Saving overwrites the slot;
/// restoring hands out a copy and keeps the slot for repeated loads.
#[derive(Default)]
pub struct SnapshotStore {
    slot: Option<HashSet<Cell>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self { slot: None }
    }

    /// Copy the current population into the slot.
    pub fn save(&mut self, live: &LiveSet) {
        self.slot = Some(live.iter().copied().collect());
    }

    /// A copy of the saved population, or `None` when nothing was ever
    /// saved. Callers leave their state alone on `None`.
    pub fn restore(&self) -> Option<HashSet<Cell>> {
        self.slot.clone()
    }

    pub fn is_saved(&self) -> bool {
        self.slot.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn restore_without_save_is_none() {
        let store = SnapshotStore::new();
        assert!(store.restore().is_none());
        assert!(!store.is_saved());
    }

    #[test]
    fn save_copies_independently_of_later_edits() {
        let mut live = LiveSet::new(vec![Cell::new(0, 0), Cell::new(1, 0)]);
        let mut store = SnapshotStore::new();
        store.save(&live);

        live.toggle(Cell::new(9, 9));
        live.toggle(Cell::new(0, 0));

        let restored = store.restore().expect("snapshot present");
        assert_eq!(restored.len(), 2);
        assert!(restored.contains(&Cell::new(0, 0)));
        assert!(!restored.contains(&Cell::new(9, 9)));
    }

    #[test]
    fn restore_is_repeatable() {
        let live = LiveSet::new(vec![Cell::new(-2, 5)]);
        let mut store = SnapshotStore::new();
        store.save(&live);
        assert_eq!(store.restore(), store.restore());
        assert!(store.is_saved());
    }

    #[test]
    fn save_overwrites_the_slot() {
        let mut store = SnapshotStore::new();
        store.save(&LiveSet::new(vec![Cell::new(1, 1)]));
        store.save(&LiveSet::new(vec![Cell::new(2, 2)]));
        let restored = store.restore().expect("snapshot present");
        assert_eq!(restored.len(), 1);
        assert!(restored.contains(&Cell::new(2, 2)));
    }
}
