use crate::grid::Cell;
use std::path::PathBuf;

/// Animation delay bounds in milliseconds
pub const MIN_DELAY_MS: u64 = 10;
pub const MAX_DELAY_MS: u64 = 1000;
/// Default animation delay
pub const DEFAULT_DELAY_MS: u64 = 100;
/// Default cell edge length in terminal columns
pub const DEFAULT_CELL_SIZE: i64 = 2;
/// Probability of a cell being alive in a random soup fill
pub const SOUP_DENSITY: f64 = 0.3;

/// Configuration for an interactive session
#[derive(Clone)]
pub struct LifeConfig {
    pub delay_ms: u64,
    pub cell_size: i64,
    pub draw_char: char,
    pub color_scheme: u8,
    pub seed: Option<u64>,
    pub export_dir: PathBuf,
    pub pattern_file: Option<PathBuf>,
    pub initial_cells: Vec<Cell>,
}
