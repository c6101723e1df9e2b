use thiserror::Error;

/// Failures surfaced by the simulation core and the file shell.
///
/// Every operation is total: it either succeeds or returns one of these
/// without touching existing state.
#[derive(Debug, Error)]
pub enum LifeError {
    /// Export was attempted while no cell is alive.
    #[error("the grid is empty")]
    EmptyGrid,

    /// A pattern decode produced no usable cell.
    #[error("the pattern data is not well formatted")]
    Format,

    /// File access failed at the shell boundary.
    #[error("file access failed: {0}")]
    Io(#[from] std::io::Error),
}
