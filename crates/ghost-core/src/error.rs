use crate::model::cell::Cell;
use crate::model::grid::GridWorld;
use thiserror::Error;

/// Unrecoverable faults raised by the belief kernel.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum BeliefError {
    /// The freshly computed posterior does not sum to 1 within tolerance.
    /// Distinct from belief collapse, which is an expected degenerate
    /// input and recovers silently.
    #[error("posterior mass sums to {total}, expected 1.0")]
    Normalization { total: f64 },
}

/// Faults surfaced by `GameSession` command handlers.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum SessionError {
    /// The presentation layer sent a coordinate that is not on the board.
    /// This is a caller bug, not a playable move, so it fails fast.
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Cell),
    #[error(transparent)]
    Belief(#[from] BeliefError),
}

/// Problems restoring a serialized session.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot holds {found} belief values, expected {}", GridWorld::CELL_COUNT)]
    BeliefLength { found: usize },
    #[error("snapshot holds {found} observation entries, expected {}", GridWorld::CELL_COUNT)]
    ObservationLength { found: usize },
    #[error("snapshot belief value {value} at index {index} is not a probability")]
    InvalidMass { index: usize, value: f64 },
    #[error("snapshot belief mass {total} is not normalized")]
    Mass { total: f64 },
    #[error("snapshot target {0} is outside the grid")]
    TargetOutOfBounds(Cell),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
