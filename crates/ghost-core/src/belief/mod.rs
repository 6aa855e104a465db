//! Posterior probability tracking for the ghost's location.
//!
//! One full Bayesian update runs per probe: likelihoods from the sensor
//! calibration table, a prior-weighted marginal, then an exact posterior.
//! A zero marginal is an expected degenerate input and recovers by
//! resetting to the uniform prior ("belief collapse recovery").

mod posterior;

pub use posterior::{Belief, BeliefUpdate, NORMALIZATION_TOLERANCE};
