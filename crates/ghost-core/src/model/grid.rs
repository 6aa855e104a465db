use crate::model::cell::Cell;
use crate::model::sensor::ProximityCategory;
use rand::Rng;

/// Fixed game board geometry plus the hidden ghost location.
///
/// The target is drawn once at construction and never moves; everything
/// else here is static geometry shared by the belief kernel and the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridWorld {
    target: Cell,
}

impl GridWorld {
    pub const WIDTH: u8 = 12;
    pub const HEIGHT: u8 = 9;
    pub const CELL_COUNT: usize = Self::WIDTH as usize * Self::HEIGHT as usize;

    /// Places the ghost uniformly at random, column and row drawn
    /// independently.
    pub fn place(rng: &mut impl Rng) -> Self {
        let col = rng.gen_range(0..Self::WIDTH);
        let row = rng.gen_range(0..Self::HEIGHT);
        Self {
            target: Cell::new(col, row),
        }
    }

    /// Fixes the ghost at a known cell, for scripted scenarios and
    /// snapshot restoration. The cell must lie on the board.
    pub const fn with_target(target: Cell) -> Self {
        Self { target }
    }

    pub const fn target(&self) -> Cell {
        self.target
    }

    pub const fn contains(cell: Cell) -> bool {
        cell.col < Self::WIDTH && cell.row < Self::HEIGHT
    }

    /// Row-major index of `cell` into flat per-cell storage.
    pub const fn index_of(cell: Cell) -> usize {
        cell.row as usize * Self::WIDTH as usize + cell.col as usize
    }

    /// All board cells in row-major order.
    pub fn cells() -> impl Iterator<Item = Cell> {
        (0..Self::HEIGHT).flat_map(|row| (0..Self::WIDTH).map(move |col| Cell::new(col, row)))
    }

    /// The noisy-in-name-only sensor: classifies the true Chebyshev
    /// distance from `probe` to the ghost.
    pub fn sense(&self, probe: Cell) -> ProximityCategory {
        ProximityCategory::classify(probe.distance(self.target))
    }
}
