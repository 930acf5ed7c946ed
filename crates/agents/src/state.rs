//! Common agent state tracking and settlement.
//!
//! Every strategy embeds an `AgentState` rather than carrying its own
//! balance field. Settlement is the only place the balance changes during
//! a run; `reset` re-arms the state at the start of each trial so the same
//! strategy instance can be evaluated across seeds independently.

use sim_core::DayOutcome;
use types::Product;

/// Balance and bookkeeping shared across strategy implementations.
///
/// The balance is signed: purchases are never blocked by affordability,
/// so a streak of bad buys can push it negative.
#[derive(Debug, Clone, Default)]
pub struct AgentState {
    /// Current account balance.
    balance: f64,
    /// Days settled since the last reset.
    days_settled: u64,
    /// Products bought since the last reset.
    purchases: u64,
    /// Bought products that turned out to work.
    working_purchases: u64,
}

impl AgentState {
    /// Create state with an initial balance.
    pub fn new(initial_balance: f64) -> Self {
        Self {
            balance: initial_balance,
            ..Self::default()
        }
    }

    /// Reset to the given balance and clear all counters. Called once at
    /// the start of every run.
    pub fn reset(&mut self, initial_balance: f64) {
        *self = Self::new(initial_balance);
    }

    /// Current balance.
    pub fn balance(&self) -> f64 {
        self.balance
    }

    /// Days settled since the last reset.
    pub fn days_settled(&self) -> u64 {
        self.days_settled
    }

    /// Products bought since the last reset.
    pub fn purchases(&self) -> u64 {
        self.purchases
    }

    /// Bought products that were in working condition.
    pub fn working_purchases(&self) -> u64 {
        self.working_purchases
    }

    /// Settle one trading day and return the new balance.
    ///
    /// If the product was bought its price is withdrawn, and its value
    /// deposited only when it works. The daily stipend is deposited
    /// unconditionally, once per day. Total: no failure modes.
    pub fn settle(&mut self, product: &Product, outcome: DayOutcome, daily_stipend: f64) -> f64 {
        if outcome.bought() {
            self.balance -= product.price;
            self.purchases += 1;
            if outcome.working() {
                self.balance += product.value;
                self.working_purchases += 1;
            }
        }
        self.balance += daily_stipend;
        self.days_settled += 1;
        self.balance
    }
}
