use crate::belief::{Belief, NORMALIZATION_TOLERANCE};
use crate::error::SnapshotError;
use crate::game::session::{GameSession, Mode, Status};
use crate::model::cell::Cell;
use crate::model::grid::GridWorld;
use crate::model::sensor::ProximityCategory;
use serde::{Deserialize, Serialize};

/// Full serializable image of a session, including the hidden target so
/// saved games can be replayed and debugged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SessionSnapshot {
    pub seed: u64,
    pub target: Cell,
    pub belief: Vec<f64>,
    pub collapse_count: u32,
    pub observations: Vec<Option<ProximityCategory>>,
    pub score: u32,
    pub bust_attempts: u8,
    pub mode: Mode,
    pub status: Status,
    pub peep_enabled: bool,
    pub halted: bool,
}

impl SessionSnapshot {
    pub fn capture(session: &GameSession) -> Self {
        SessionSnapshot {
            seed: session.seed(),
            target: session.target(),
            belief: session.belief().values().to_vec(),
            collapse_count: session.belief().collapse_count(),
            observations: session.observations().to_vec(),
            score: session.score(),
            bust_attempts: session.bust_attempts(),
            mode: session.mode(),
            status: session.status(),
            peep_enabled: session.peep_enabled(),
            halted: session.is_halted(),
        }
    }

    pub fn restore(self) -> Result<GameSession, SnapshotError> {
        if !GridWorld::contains(self.target) {
            return Err(SnapshotError::TargetOutOfBounds(self.target));
        }

        let belief: [f64; GridWorld::CELL_COUNT] = self
            .belief
            .as_slice()
            .try_into()
            .map_err(|_| SnapshotError::BeliefLength {
                found: self.belief.len(),
            })?;
        for (index, value) in belief.iter().enumerate() {
            if !(value.is_finite() && *value >= 0.0) {
                return Err(SnapshotError::InvalidMass {
                    index,
                    value: *value,
                });
            }
        }
        // Written so a NaN sum fails closed rather than slipping past the
        // tolerance comparison.
        let total: f64 = belief.iter().sum();
        if !((total - 1.0).abs() < NORMALIZATION_TOLERANCE) {
            return Err(SnapshotError::Mass { total });
        }

        let observations: [Option<ProximityCategory>; GridWorld::CELL_COUNT] = self
            .observations
            .as_slice()
            .try_into()
            .map_err(|_| SnapshotError::ObservationLength {
                found: self.observations.len(),
            })?;

        Ok(GameSession::from_snapshot_parts(
            GridWorld::with_target(self.target),
            Belief::from_parts(belief, self.collapse_count),
            observations,
            self.score,
            self.bust_attempts,
            self.mode,
            self.status,
            self.peep_enabled,
            self.halted,
            self.seed,
        ))
    }

    pub fn to_json(session: &GameSession) -> serde_json::Result<String> {
        let snapshot = Self::capture(session);
        serde_json::to_string_pretty(&snapshot)
    }

    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}
