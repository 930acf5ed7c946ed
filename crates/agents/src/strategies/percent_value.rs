//! Percent-of-value strategy.

use types::{AgentId, Product};

use crate::state::AgentState;
use crate::traits::Agent;

/// Believes a product is only ever worth a fixed percentage of its stated
/// value, and buys when the price is at or under that fraction. Ignores
/// the quality belief entirely.
///
/// At 100 percent this buys every product the market generates (the price
/// is drawn at or under the value); at 0 percent it buys nothing priced
/// above zero.
pub struct PercentValue {
    id: AgentId,
    state: AgentState,
    percent: f64,
}

impl PercentValue {
    /// Create a strategy that pays up to `percent`% of the stated value.
    pub fn new(id: impl Into<AgentId>, percent: f64) -> Self {
        Self {
            id: id.into(),
            state: AgentState::default(),
            percent,
        }
    }

    /// The configured percentage.
    pub fn percent(&self) -> f64 {
        self.percent
    }
}

impl Agent for PercentValue {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn name(&self) -> &str {
        "PercentValue"
    }

    fn decide(&mut self, product: &Product, _belief: f64) -> bool {
        product.price <= product.value * self.percent / 100.0
    }

    fn state(&self) -> &AgentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }
}
