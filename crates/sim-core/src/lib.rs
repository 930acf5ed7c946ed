//! Market mechanics for the merchant gym.
//!
//! This crate provides:
//! - `MarketProcess` - per-day product generation and condition draws
//! - `DayOutcome` - the four ways a trading day can resolve
//! - `SimError` - the shared error type for the whole engine
//!
//! The market process owns the quality distribution and the value cap;
//! every random draw it makes comes from a caller-supplied generator so
//! that one seeded generator per run fully determines a trajectory.

mod error;
mod market;
mod outcome;

pub use error::{Result, SimError};
pub use market::MarketProcess;
pub use outcome::DayOutcome;
