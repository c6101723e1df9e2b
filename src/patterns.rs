//! Built-in starting patterns.

use crate::grid::Cell;

/// A named shape, stored as offsets with grid y growing upward.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(i64, i64)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (1, 0), (2, 0)],
    },
    Pattern {
        name: "Toad",
        cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Outer rows
            (-4, 6), (-3, 6), (-2, 6), (2, 6), (3, 6), (4, 6),
            (-4, -6), (-3, -6), (-2, -6), (2, -6), (3, -6), (4, -6),
            // Inner rows
            (-4, 1), (-3, 1), (-2, 1), (2, 1), (3, 1), (4, 1),
            (-4, -1), (-3, -1), (-2, -1), (2, -1), (3, -1), (4, -1),
            // Outer columns
            (-6, 4), (-6, 3), (-6, 2), (-6, -2), (-6, -3), (-6, -4),
            (6, 4), (6, 3), (6, 2), (6, -2), (6, -3), (6, -4),
            // Inner columns
            (-1, 4), (-1, 3), (-1, 2), (-1, -2), (-1, -3), (-1, -4),
            (1, 4), (1, 3), (1, 2), (1, -2), (1, -3), (1, -4),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (1, 1), (-1, 0), (0, 0), (0, -1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (0, 3), (0, 4), (1, 3), (1, 4),
            (10, 2), (10, 3), (10, 4), (11, 1), (11, 5), (12, 0), (12, 6),
            (13, 0), (13, 6), (14, 3), (15, 1), (15, 5), (16, 2), (16, 3),
            (16, 4), (17, 3),
            (20, 4), (20, 5), (20, 6), (21, 4), (21, 5), (21, 6), (22, 3),
            (22, 7), (24, 2), (24, 3), (24, 7), (24, 8),
            (34, 5), (34, 6), (35, 5), (35, 6),
        ],
    },
];

impl Pattern {
    /// The shape translated so its bounding box sits centered on `center`.
    pub fn cells_at(&self, center: Cell) -> Vec<Cell> {
        let min_x = self.cells.iter().map(|&(x, _)| x).min().unwrap_or(0);
        let max_x = self.cells.iter().map(|&(x, _)| x).max().unwrap_or(0);
        let min_y = self.cells.iter().map(|&(_, y)| y).min().unwrap_or(0);
        let max_y = self.cells.iter().map(|&(_, y)| y).max().unwrap_or(0);
        let dx = center.x - (min_x + max_x) / 2;
        let dy = center.y - (min_y + max_y) / 2;
        self.cells
            .iter()
            .map(|&(x, y)| Cell::new(x + dx, y + dy))
            .collect()
    }
}
