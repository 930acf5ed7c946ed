//! Market-rate learning strategy.

use sim_core::{Result, SimError};
use types::{AgentId, LabeledInstance, Product};

use crate::state::AgentState;
use crate::traits::Agent;

/// Estimates the overall market quality — the fraction of Good labels in
/// the training data — and uses that single rate as its belief for every
/// future decision, ignoring the individual product's features.
///
/// The buy rule is expected value: buy when `belief * value > price`.
pub struct MarketRate {
    id: AgentId,
    state: AgentState,
    market_rate: f64,
}

impl MarketRate {
    /// Create a market-rate learner. Before `learn` runs, the rate
    /// defaults to even odds.
    pub fn new(id: impl Into<AgentId>) -> Self {
        Self {
            id: id.into(),
            state: AgentState::default(),
            market_rate: 0.5,
        }
    }

    /// The current rate estimate.
    pub fn market_rate(&self) -> f64 {
        self.market_rate
    }
}

impl Agent for MarketRate {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn name(&self) -> &str {
        "MarketRate"
    }

    fn decide(&mut self, product: &Product, belief: f64) -> bool {
        belief * product.value > product.price
    }

    fn derive_belief(&mut self, _features: &[String]) -> f64 {
        self.market_rate
    }

    fn learn(&mut self, instances: &[LabeledInstance]) -> Result<()> {
        if instances.is_empty() {
            return Err(SimError::EmptyTrainingSet);
        }
        let good = instances.iter().filter(|i| i.label().is_good()).count();
        self.market_rate = good as f64 / instances.len() as f64;
        Ok(())
    }

    fn state(&self) -> &AgentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }
}
