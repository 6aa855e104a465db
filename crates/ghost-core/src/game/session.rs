use crate::belief::Belief;
use crate::error::{SessionError, SnapshotError};
use crate::game::serialization::SessionSnapshot;
use crate::model::cell::Cell;
use crate::model::grid::GridWorld;
use crate::model::sensor::ProximityCategory;
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

pub const STARTING_SCORE: u32 = 35;
pub const STARTING_BUST_ATTEMPTS: u8 = 2;

/// Whether the next board click probes or busts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    Searching,
    AwaitingBust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Active,
    Won,
    Lost,
}

/// One game of Bust the Ghost: the hidden target, the evolving posterior,
/// and the score/attempt bookkeeping around it.
///
/// The session is the sole entry point for the presentation layer. Every
/// command is a single synchronous call; terminal sessions ignore all
/// commands, and a session halted by an engine fault does the same while
/// keeping its last valid state readable.
#[derive(Debug, Clone)]
pub struct GameSession {
    world: GridWorld,
    belief: Belief,
    observations: [Option<ProximityCategory>; GridWorld::CELL_COUNT],
    score: u32,
    bust_attempts: u8,
    mode: Mode,
    status: Status,
    peep_enabled: bool,
    halted: bool,
    seed: u64,
}

impl GameSession {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    pub fn with_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        Self::from_world(GridWorld::place(&mut rng), seed)
    }

    /// Starts a session with the ghost at a known cell, for scripted
    /// scenarios. The recorded seed is 0.
    pub fn with_target(target: Cell) -> Self {
        Self::from_world(GridWorld::with_target(target), 0)
    }

    fn from_world(world: GridWorld, seed: u64) -> Self {
        Self {
            world,
            belief: Belief::new_uniform(),
            observations: [None; GridWorld::CELL_COUNT],
            score: STARTING_SCORE,
            bust_attempts: STARTING_BUST_ATTEMPTS,
            mode: Mode::Searching,
            status: Status::Active,
            peep_enabled: false,
            halted: false,
            seed,
        }
    }

    pub fn from_snapshot(snapshot: &SessionSnapshot) -> Result<Self, SnapshotError> {
        snapshot.clone().restore()
    }

    pub(crate) fn from_snapshot_parts(
        world: GridWorld,
        belief: Belief,
        observations: [Option<ProximityCategory>; GridWorld::CELL_COUNT],
        score: u32,
        bust_attempts: u8,
        mode: Mode,
        status: Status,
        peep_enabled: bool,
        halted: bool,
        seed: u64,
    ) -> Self {
        Self {
            world,
            belief,
            observations,
            score,
            bust_attempts,
            mode,
            status,
            peep_enabled,
            halted,
            seed,
        }
    }

    /// Arms bust mode. No effect unless the session is searching with at
    /// least one attempt left; re-clicking the armed button does nothing.
    pub fn request_bust_mode(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        if self.mode == Mode::Searching && self.bust_attempts > 0 {
            self.mode = Mode::AwaitingBust;
        }
    }

    /// Flips the presentation-only flag that exposes posterior values to
    /// the view. Never touches game state.
    pub fn toggle_peep(&mut self) {
        if !self.accepts_commands() {
            return;
        }
        self.peep_enabled = !self.peep_enabled;
    }

    /// Handles a board click: a bust resolution when armed, otherwise a
    /// probe. Clicks on finished or halted sessions are ignored.
    pub fn click(&mut self, cell: Cell) -> Result<(), SessionError> {
        if !GridWorld::contains(cell) {
            return Err(SessionError::OutOfBounds(cell));
        }
        if !self.accepts_commands() {
            return Ok(());
        }
        match self.mode {
            Mode::AwaitingBust => {
                self.resolve_bust(cell);
                Ok(())
            }
            Mode::Searching => self.probe(cell),
        }
    }

    fn resolve_bust(&mut self, cell: Cell) {
        // Disarm first: a bust click always returns to searching.
        self.mode = Mode::Searching;
        if cell == self.world.target() {
            self.status = Status::Won;
        } else {
            self.bust_attempts -= 1;
            if self.bust_attempts == 0 {
                self.status = Status::Lost;
            }
        }
    }

    fn probe(&mut self, cell: Cell) -> Result<(), SessionError> {
        // Probes cost a point no matter where they land or what they read.
        self.score = self.score.saturating_sub(1);
        let category = self.world.sense(cell);
        self.observations[GridWorld::index_of(cell)] = Some(category);
        if let Err(fault) = self.belief.update(cell, category) {
            self.halted = true;
            return Err(fault.into());
        }
        if self.score == 0 {
            self.status = Status::Lost;
        }
        Ok(())
    }

    fn accepts_commands(&self) -> bool {
        self.status == Status::Active && !self.halted
    }

    pub fn belief(&self) -> &Belief {
        &self.belief
    }

    pub fn observations(&self) -> &[Option<ProximityCategory>; GridWorld::CELL_COUNT] {
        &self.observations
    }

    pub fn observation(&self, cell: Cell) -> Option<ProximityCategory> {
        self.observations[GridWorld::index_of(cell)]
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn bust_attempts(&self) -> u8 {
        self.bust_attempts
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn peep_enabled(&self) -> bool {
        self.peep_enabled
    }

    /// True once a belief update has faulted; the session then ignores
    /// every command and only its accessors remain useful.
    pub fn is_halted(&self) -> bool {
        self.halted
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Hidden from the player-facing view; exposed for replay, debugging
    /// and end-of-game reveals.
    pub fn target(&self) -> Cell {
        self.world.target()
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}
