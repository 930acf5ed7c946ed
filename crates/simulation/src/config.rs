//! Run configuration.
//!
//! Everything a run depends on is carried here explicitly and threaded
//! into the loops and the aggregator — there is no ambient market state.

use serde::{Deserialize, Serialize};
use sim_core::{Result, SimError};
use types::MarketOdds;

/// Default number of simulated days per run.
pub const DEFAULT_NUM_DAYS: usize = 1_000;

/// Default starting balance.
pub const DEFAULT_INITIAL_BALANCE: f64 = 1_000.0;

/// Default daily deposit from outside the market.
pub const DEFAULT_DAILY_STIPEND: f64 = 100.0;

/// Default product value cap in no-learning mode.
pub const NO_LEARNING_VALUE_CAP: f64 = 50_000.0;

/// Default product value cap in learning mode.
pub const LEARNING_VALUE_CAP: f64 = 100_000.0;

/// Configuration for a simulation run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunConfig {
    /// Days per no-learning run (learning runs take their length from the
    /// test fold instead).
    pub num_days: usize,

    /// Balance every agent starts each run with.
    pub initial_balance: f64,

    /// Deposited once per day regardless of the trading outcome.
    pub daily_stipend: f64,

    /// Cap on a product's drawn value.
    pub value_cap: f64,

    /// Market quality distribution.
    pub odds: MarketOdds,

    /// Emit per-day narration at debug level.
    pub verbose: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            num_days: DEFAULT_NUM_DAYS,
            initial_balance: DEFAULT_INITIAL_BALANCE,
            daily_stipend: DEFAULT_DAILY_STIPEND,
            value_cap: NO_LEARNING_VALUE_CAP,
            odds: MarketOdds::FAIR,
            verbose: false,
        }
    }
}

impl RunConfig {
    /// Defaults for a no-learning evaluation under the given odds.
    pub fn new(odds: MarketOdds) -> Self {
        Self {
            odds,
            ..Self::default()
        }
    }

    /// Defaults for a learning evaluation: same balances, higher value cap.
    pub fn for_learning(odds: MarketOdds) -> Self {
        Self {
            odds,
            value_cap: LEARNING_VALUE_CAP,
            ..Self::default()
        }
    }

    /// Set the number of days.
    pub fn with_num_days(mut self, num_days: usize) -> Self {
        self.num_days = num_days;
        self
    }

    /// Set the initial balance.
    pub fn with_initial_balance(mut self, balance: f64) -> Self {
        self.initial_balance = balance;
        self
    }

    /// Set the daily stipend.
    pub fn with_daily_stipend(mut self, stipend: f64) -> Self {
        self.daily_stipend = stipend;
        self
    }

    /// Set the product value cap.
    pub fn with_value_cap(mut self, cap: f64) -> Self {
        self.value_cap = cap;
        self
    }

    /// Enable per-day narration.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Validate the configuration. Fatal errors, checked before any
    /// simulation executes.
    pub fn validate(&self) -> Result<()> {
        if !self.odds.is_valid() {
            return Err(SimError::InvalidOdds {
                alpha: self.odds.alpha,
                beta: self.odds.beta,
            });
        }
        if self.num_days == 0 {
            return Err(SimError::InvalidDays);
        }
        Ok(())
    }
}
