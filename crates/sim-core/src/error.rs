//! Error types shared across the engine.
//!
//! Two classes of failure exist:
//! - input errors abort a single run and leave the rest of the batch to
//!   the caller (empty training data, malformed instance rows, a pool too
//!   small to fold);
//! - configuration errors are fatal and must surface before any
//!   simulation executes (bad distribution shapes, no seeds, trajectory
//!   bookkeeping violations).
//!
//! The engine never retries: it is deterministic given valid inputs, so a
//! failed run cannot succeed on a second attempt.

use std::fmt;

/// Result type for engine operations.
pub type Result<T> = std::result::Result<T, SimError>;

/// Errors that can occur while configuring or running a simulation.
#[derive(Debug, Clone, PartialEq)]
pub enum SimError {
    /// A learning step that needs a non-zero instance count got none.
    EmptyTrainingSet,
    /// A data row had no terminal class label.
    MissingLabel { row: usize },
    /// A data row's terminal label was not a known class code.
    UnknownLabel { row: usize, value: String },
    /// A data row could not be read at all.
    Malformed { row: usize, reason: String },
    /// The instance pool is too small to cut into the requested folds.
    EmptyFold { pool: usize, folds: usize },
    /// Non-positive Beta shape parameters.
    InvalidOdds { alpha: f64, beta: f64 },
    /// An evaluation was requested with no seeds.
    NoSeeds,
    /// A run was configured with zero days.
    InvalidDays,
    /// Trajectories for one strategy disagreed on length during aggregation.
    TrajectoryLengthMismatch {
        agent: String,
        expected: usize,
        actual: usize,
    },
}

impl SimError {
    /// Whether this error is configuration-class: fatal for the whole
    /// batch rather than a single run.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            SimError::InvalidOdds { .. }
                | SimError::NoSeeds
                | SimError::InvalidDays
                | SimError::TrajectoryLengthMismatch { .. }
        )
    }
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::EmptyTrainingSet => {
                write!(f, "training set is empty")
            }
            SimError::MissingLabel { row } => {
                write!(f, "row {}: no terminal class label", row)
            }
            SimError::UnknownLabel { row, value } => {
                write!(f, "row {}: unknown class label {:?}", row, value)
            }
            SimError::Malformed { row, reason } => {
                write!(f, "row {}: {}", row, reason)
            }
            SimError::EmptyFold { pool, folds } => {
                write!(f, "{} instances cannot fill {} folds", pool, folds)
            }
            SimError::InvalidOdds { alpha, beta } => {
                write!(f, "market odds must be positive, got ({}, {})", alpha, beta)
            }
            SimError::NoSeeds => write!(f, "no seeds supplied"),
            SimError::InvalidDays => write!(f, "number of days must be positive"),
            SimError::TrajectoryLengthMismatch {
                agent,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "trajectory for {} has {} days, expected {}",
                    agent, actual, expected
                )
            }
        }
    }
}

impl std::error::Error for SimError {}
