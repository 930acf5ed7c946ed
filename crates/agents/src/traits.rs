//! The decision interface every buying strategy satisfies.
//!
//! A strategy is asked one question per simulated day: given the product
//! on offer and a belief about its quality, buy or pass. Learning-mode
//! strategies additionally derive their belief from a feature vector and
//! may update internal state from labeled history before the run.
//!
//! Decisions must be a function of the inputs plus the strategy's own
//! state only — the true condition is never visible before settlement.

use sim_core::Result;
use types::{AgentId, LabeledInstance, Product};

use crate::state::AgentState;

/// The capability contract for a buying strategy.
///
/// `decide` takes `&mut self` because some strategies (coin flippers)
/// consume their own seeded generator; everything else treats it as a
/// read of internal state.
pub trait Agent: Send {
    /// The strategy's reporting id.
    fn id(&self) -> &AgentId;

    /// A human-readable strategy name for logging.
    fn name(&self) -> &str {
        "Agent"
    }

    /// Decide whether to buy, given the product and a belief in `[0, 1]`
    /// that it is in working condition.
    fn decide(&mut self, product: &Product, belief: f64) -> bool;

    /// Map a feature vector to a quality belief.
    ///
    /// Strategies that do not use features return a constant `0.0`,
    /// signaling "unused".
    fn derive_belief(&mut self, _features: &[String]) -> f64 {
        0.0
    }

    /// Decide from features: derive a belief, then decide.
    ///
    /// Strategies with a direct feature-based rule may override.
    fn decide_from_features(&mut self, product: &Product, features: &[String]) -> bool {
        let belief = self.derive_belief(features);
        self.decide(product, belief)
    }

    /// Update internal state from historical labeled data.
    ///
    /// The default is a no-op. Strategies that estimate a rate from the
    /// instance count must fail with `SimError::EmptyTrainingSet` rather
    /// than divide by zero.
    fn learn(&mut self, _instances: &[LabeledInstance]) -> Result<()> {
        Ok(())
    }

    /// Shared balance and bookkeeping state.
    fn state(&self) -> &AgentState;

    /// Mutable access for settlement and per-run resets.
    fn state_mut(&mut self) -> &mut AgentState;

    /// Current balance.
    fn balance(&self) -> f64 {
        self.state().balance()
    }
}
