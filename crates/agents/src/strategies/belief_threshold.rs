//! Fixed-threshold-on-belief strategy.

use types::{AgentId, Product};

use crate::state::AgentState;
use crate::traits::Agent;

/// Buys whenever the quality belief clears a fixed bar, regardless of the
/// product's value and price. The canonical variant uses 0.5: buy when
/// the product is more likely working than not.
pub struct BeliefThreshold {
    id: AgentId,
    state: AgentState,
    threshold: f64,
}

impl BeliefThreshold {
    /// Create a strategy with the given belief threshold.
    pub fn new(id: impl Into<AgentId>, threshold: f64) -> Self {
        Self {
            id: id.into(),
            state: AgentState::default(),
            threshold,
        }
    }

    /// The canonical better-than-even-odds variant.
    pub fn half(id: impl Into<AgentId>) -> Self {
        Self::new(id, 0.5)
    }
}

impl Agent for BeliefThreshold {
    fn id(&self) -> &AgentId {
        &self.id
    }

    fn name(&self) -> &str {
        "BeliefThreshold"
    }

    fn decide(&mut self, _product: &Product, belief: f64) -> bool {
        belief > self.threshold
    }

    fn state(&self) -> &AgentState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut AgentState {
        &mut self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buys_strictly_above_threshold() {
        let mut agent = BeliefThreshold::half("HP");
        let product = Product::new(100.0, 99.0);
        assert!(agent.decide(&product, 0.51));
        assert!(!agent.decide(&product, 0.5));
        assert!(!agent.decide(&product, 0.1));
    }

    #[test]
    fn test_price_is_irrelevant() {
        let mut agent = BeliefThreshold::new("HT", 0.9);
        let ruinous = Product::new(1.0, 1.0);
        assert!(agent.decide(&ruinous, 0.95));
    }

    #[test]
    fn test_never_buys_on_unused_belief() {
        // Feature-less strategies derive a constant 0 belief; a threshold
        // agent evaluated through features therefore never buys.
        let mut agent = BeliefThreshold::half("HP");
        let product = Product::new(100.0, 1.0);
        assert!(!agent.decide_from_features(&product, &["a".to_string()]));
    }
}
