//! Mapping between the unbounded grid and a fixed terminal window.
//!
//! Screen coordinates follow the terminal: the origin is the top-left
//! corner and y grows downward. Grid y grows upward, with the viewport
//! origin pinned to the window's bottom-left corner. One terminal cell
//! plays the role of one screen unit.

use crate::grid::{Cell, LiveSet};

/// Cells never shrink below one screen unit per edge.
pub const MIN_CELL_SIZE: i64 = 1;

/// An inclusive rectangle of grid coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRange {
    pub min: Cell,
    pub max: Cell,
}

impl CellRange {
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= self.min.x && cell.x <= self.max.x && cell.y >= self.min.y && cell.y <= self.max.y
    }
}

/// The screen-unit square covered by one grid cell: top-left corner plus
/// edge length. The square may hang off the window edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellRect {
    pub x: i64,
    pub y: i64,
    pub size: i64,
}

impl CellRect {
    /// A screen unit inside the square. Maps back to the owning cell under
    /// [`Viewport::cell_at`] for any cell size.
    pub fn center(&self) -> (i64, i64) {
        (self.x + self.size / 2, self.y + self.size / 2)
    }
}

/// Pan offset and zoom level of the rendering window. Holds no simulation
/// state.
pub struct Viewport {
    origin: Cell,
    cell_size: i64,
    width: i64,
    height: i64,
}

impl Viewport {
    pub fn new(width: i64, height: i64, cell_size: i64) -> Self {
        Self {
            origin: Cell::new(0, 0),
            cell_size: cell_size.max(MIN_CELL_SIZE),
            width,
            height,
        }
    }

    pub fn origin(&self) -> Cell {
        self.origin
    }

    pub fn cell_size(&self) -> i64 {
        self.cell_size
    }

    pub fn size(&self) -> (i64, i64) {
        (self.width, self.height)
    }

    /// Follow a terminal resize. Origin and zoom are kept.
    pub fn resize(&mut self, width: i64, height: i64) {
        self.width = width;
        self.height = height;
    }

    /// Shift the window by whole grid cells.
    pub fn pan(&mut self, dx: i64, dy: i64) {
        self.origin = Cell::new(self.origin.x + dx, self.origin.y + dy);
    }

    /// Grow or shrink the cells while keeping the grid cell under the
    /// window center in place. Integer division makes the re-centering
    /// drift by up to one cell; that is accepted behavior, not a bug.
    pub fn zoom(&mut self, delta: i64) {
        let center_x = self.origin.x + (self.width / 2) / self.cell_size;
        let center_y = self.origin.y + (self.height / 2) / self.cell_size;
        self.cell_size = (self.cell_size + delta).max(MIN_CELL_SIZE);
        self.origin = Cell::new(
            center_x - (self.width / 2) / self.cell_size,
            center_y - (self.height / 2) / self.cell_size,
        );
    }

    /// The grid cell under a screen position.
    ///
    /// `div_euclid` floors toward negative infinity, which keeps the
    /// mapping correct left of and below the origin. The bottom visible
    /// row maps to `origin.y`.
    pub fn cell_at(&self, px: i64, py: i64) -> Cell {
        Cell::new(
            px.div_euclid(self.cell_size) + self.origin.x,
            (self.height - 1 - py).div_euclid(self.cell_size) + self.origin.y,
        )
    }

    /// The grid cell at the window center.
    pub fn center_cell(&self) -> Cell {
        self.cell_at(self.width / 2, self.height / 2)
    }

    /// Inclusive grid rectangle that may appear in the window. Cells
    /// outside it are culled from rendering but keep being simulated.
    pub fn visible_range(&self) -> CellRange {
        CellRange {
            min: self.origin,
            max: Cell::new(
                self.origin.x + self.width / self.cell_size,
                self.origin.y + self.height / self.cell_size,
            ),
        }
    }

    /// Forward mapping from a grid cell to its screen square,
    /// inverse-consistent with [`Viewport::cell_at`].
    pub fn cell_rect(&self, cell: Cell) -> CellRect {
        CellRect {
            x: (cell.x - self.origin.x) * self.cell_size,
            y: self.height - (cell.y - self.origin.y + 1) * self.cell_size,
            size: self.cell_size,
        }
    }

    /// Live cells worth drawing, in stable order.
    pub fn visible_cells(&self, live: &LiveSet) -> Vec<Cell> {
        let range = self.visible_range();
        let mut cells: Vec<Cell> = live.iter().copied().filter(|&c| range.contains(c)).collect();
        cells.sort();
        cells
    }
}
