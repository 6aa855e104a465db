use crate::error::BeliefError;
use crate::model::cell::Cell;
use crate::model::grid::GridWorld;
use crate::model::sensor::ProximityCategory;

/// Tolerance on `|sum - 1.0|` after a non-degenerate update.
pub const NORMALIZATION_TOLERANCE: f64 = 1e-6;

const UNIFORM_MASS: f64 = 1.0 / GridWorld::CELL_COUNT as f64;

/// Probability mass over every board cell, row-major. Starts uniform and
/// is only ever replaced by a validated posterior or the uniform reset.
#[derive(Debug, Clone, PartialEq)]
pub struct Belief {
    probs: [f64; GridWorld::CELL_COUNT],
    collapse_count: u32,
}

/// How an observation was absorbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BeliefUpdate {
    /// The exact Bayes posterior was committed.
    Posterior,
    /// The observation had zero marginal probability; the grid was reset
    /// to the uniform prior.
    CollapseRecovered,
}

impl Belief {
    pub fn new_uniform() -> Self {
        Self {
            probs: [UNIFORM_MASS; GridWorld::CELL_COUNT],
            collapse_count: 0,
        }
    }

    pub(crate) fn from_parts(probs: [f64; GridWorld::CELL_COUNT], collapse_count: u32) -> Self {
        Self {
            probs,
            collapse_count,
        }
    }

    /// Current mass assigned to `cell`.
    pub fn prob(&self, cell: Cell) -> f64 {
        self.probs[GridWorld::index_of(cell)]
    }

    /// All cell masses, row-major.
    pub fn values(&self) -> &[f64; GridWorld::CELL_COUNT] {
        &self.probs
    }

    pub fn total_mass(&self) -> f64 {
        self.probs.iter().sum()
    }

    /// Cell currently holding the most mass (first one in row-major order
    /// on ties).
    pub fn max_cell(&self) -> Cell {
        let mut best = Cell::new(0, 0);
        let mut best_mass = f64::NEG_INFINITY;
        for cell in GridWorld::cells() {
            let mass = self.prob(cell);
            if mass > best_mass {
                best = cell;
                best_mass = mass;
            }
        }
        best
    }

    /// Number of uniform resets performed so far.
    pub fn collapse_count(&self) -> u32 {
        self.collapse_count
    }

    /// Absorbs one sensor reading taken at `observed`.
    ///
    /// The candidate posterior is built in scratch storage and committed
    /// only after the normalization check passes, so a faulted update
    /// leaves the live grid untouched.
    pub fn update(
        &mut self,
        observed: Cell,
        category: ProximityCategory,
    ) -> Result<BeliefUpdate, BeliefError> {
        let mut weighted = [0.0f64; GridWorld::CELL_COUNT];
        let mut marginal = 0.0f64;

        for cell in GridWorld::cells() {
            let index = GridWorld::index_of(cell);
            let likelihood = category.likelihood(cell.distance(observed));
            let mass = likelihood * self.probs[index];
            weighted[index] = mass;
            marginal += mass;
        }

        if marginal == 0.0 {
            self.probs = [UNIFORM_MASS; GridWorld::CELL_COUNT];
            self.collapse_count += 1;
            return Ok(BeliefUpdate::CollapseRecovered);
        }

        for mass in &mut weighted {
            *mass /= marginal;
        }

        // Written so a NaN sum fails closed rather than slipping past the
        // tolerance comparison.
        let total: f64 = weighted.iter().sum();
        if !((total - 1.0).abs() < NORMALIZATION_TOLERANCE) {
            return Err(BeliefError::Normalization { total });
        }

        self.probs = weighted;
        Ok(BeliefUpdate::Posterior)
    }
}

impl Default for Belief {
    fn default() -> Self {
        Self::new_uniform()
    }
}
