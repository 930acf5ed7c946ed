//! Coin-flip strategy.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use types::{AgentId, Product};

use crate::state::AgentState;
use crate::traits::Agent;

/// Flips a coin to decide whether to buy, ignoring the price, the value,
/// the belief, and any features.
///
/// The coin has its own generator, seeded by the caller so runs stay
/// reproducible; it is independent of the market's per-run generator.
pub struct FlipCoin {
    id: AgentId,
    state: AgentState,
    rng: StdRng,
}

impl FlipCoin {
    /// Create a coin flipper with an explicit seed.
    pub fn new(id: impl Into<AgentId>, seed: u64) -> Self {
        Self {
            id: id.into(),
            state: AgentState::default(),
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Agent for FlipCoin {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn name(&self) -> &str {
        "FlipCoin"
    }

    fn decide(&mut self, _product: &Product, _belief: f64) -> bool {
        self.rng.random::<f64>() > 0.5
    }

    fn state(&self) -> &AgentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }
}
