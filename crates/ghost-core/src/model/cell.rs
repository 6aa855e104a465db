use core::fmt;
use serde::{Deserialize, Serialize};

/// A grid coordinate: column first, row second, both zero-based.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    pub col: u8,
    pub row: u8,
}

impl Cell {
    pub const fn new(col: u8, row: u8) -> Self {
        Self { col, row }
    }

    /// Chebyshev (king-move) distance to `other`. This metric is what the
    /// sensor's likelihood buckets are calibrated against.
    pub const fn distance(self, other: Cell) -> u8 {
        let dc = self.col.abs_diff(other.col);
        let dr = self.row.abs_diff(other.row);
        if dc > dr { dc } else { dr }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.col, self.row)
    }
}
