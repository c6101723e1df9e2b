//! B3/S23 transition over the sparse live set.

use crate::grid::{Cell, LiveSet};
use std::collections::HashSet;

/// Offsets of the Moore neighborhood, the cell itself excluded.
const NEIGHBORS: [(i64, i64); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Compute the next population.
///
/// Pure: the input set is left untouched, and the caller decides when to
/// count the generation as finished. Total over any finite population.
pub fn advance(live: &LiveSet) -> HashSet<Cell> {
    // Only cells within one step of a live cell can change state, so the
    // 3x3 blocks around the current population are the whole search space.
    // This is what keeps the unbounded grid affordable.
    let mut candidates: HashSet<Cell> = HashSet::with_capacity(live.len() * 9);
    for &cell in live.iter() {
        for dy in -1..=1 {
            for dx in -1..=1 {
                candidates.insert(Cell::new(cell.x + dx, cell.y + dy));
            }
        }
    }

    let mut next = HashSet::with_capacity(live.len());
    for &cell in &candidates {
        if alive_next(live, cell) {
            next.insert(cell);
        }
    }
    next
}

/// Count the live Moore neighbors of a cell.
pub fn live_neighbors(live: &LiveSet, cell: Cell) -> u8 {
    NEIGHBORS
        .iter()
        .filter(|&&(dx, dy)| live.contains(Cell::new(cell.x + dx, cell.y + dy)))
        .count() as u8
}

fn alive_next(live: &LiveSet, cell: Cell) -> bool {
    let mut alive = 0u8;
    for (dx, dy) in NEIGHBORS {
        if live.contains(Cell::new(cell.x + dx, cell.y + dy)) {
            alive += 1;
            if alive > 3 {
                // Past three neighbors the outcome is death either way.
                return false;
            }
        }
    }
    alive == 3 || (alive == 2 && live.contains(cell))
}
