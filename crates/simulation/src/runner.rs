//! The day-by-day simulation loops.
//!
//! One `Simulation` owns a validated configuration and market process and
//! drives an agent through either loop:
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                one simulated day              │
//! │                                               │
//! │  1. Draw product (value, then price)          │
//! │  2. Resolve condition                         │
//! │     no-learning: Beta draw + uniform draw     │
//! │     learning:    test instance's label        │
//! │  3. Ask the agent to decide                   │
//! │  4. Settle, record the balance                │
//! │                                               │
//! └───────────────────────────────────────────────┘
//! ```
//!
//! Every run owns a fresh `StdRng` seeded by the caller; nothing else
//! draws from it, so a (strategy, seed) pair fully determines the
//! trajectory.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::debug;

use agents::Agent;
use sim_core::{DayOutcome, MarketProcess, Result};
use types::{LabeledInstance, Product};

use crate::config::RunConfig;

/// Drives agents through simulated trading days.
#[derive(Debug, Clone)]
pub struct Simulation {
    config: RunConfig,
    market: MarketProcess,
}

impl Simulation {
    /// Build a simulation from a configuration.
    ///
    /// Validation happens here, before anything runs; the loops
    /// themselves cannot fail on configuration.
    pub fn new(config: RunConfig) -> Result<Self> {
        config.validate()?;
        let market = MarketProcess::new(config.odds, config.value_cap)?;
        Ok(Self { config, market })
    }

    /// The run configuration.
    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// Simulate an agent with no prior learning.
    ///
    /// Resets the agent's balance, then for each day draws a product and
    /// its condition, hands the agent the day's exact quality probability
    /// as its belief, and settles. Returns the daily balance trajectory
    /// (length == `num_days`).
    pub fn run_no_learning(&self, agent: &mut dyn Agent, seed: u64) -> Vec<f64> {
        let mut rng = StdRng::seed_from_u64(seed);
        agent.state_mut().reset(self.config.initial_balance);
        debug!(agent = %agent.id(), seed, "starting no-learning run");

        let mut trajectory = Vec::with_capacity(self.config.num_days);
        for day in 1..=self.config.num_days {
            let product = self.market.next_product(&mut rng, agent.balance());
            let (belief, working) = self.market.next_condition(&mut rng);
            debug!(day, %product, belief, "offer drawn");

            let bought = agent.decide(&product, belief);
            self.settle_day(agent, day, &product, bought, working, &mut trajectory);
        }
        trajectory
    }

    /// Learn from a training fold, then replay the market over a test
    /// fold.
    ///
    /// Products are drawn exactly as in the no-learning loop; the true
    /// condition comes from each test instance's label, and the agent
    /// decides from the instance's features. Returns one balance per test
    /// instance.
    pub fn run_learning(
        &self,
        agent: &mut dyn Agent,
        train: &[LabeledInstance],
        test: &[LabeledInstance],
        seed: u64,
    ) -> Result<Vec<f64>> {
        let mut rng = StdRng::seed_from_u64(seed);
        agent.state_mut().reset(self.config.initial_balance);

        debug!(agent = %agent.id(), seed, train = train.len(), "learning");
        agent.learn(train)?;

        let mut trajectory = Vec::with_capacity(test.len());
        for (index, instance) in test.iter().enumerate() {
            let day = index + 1;
            let product = self.market.next_product(&mut rng, agent.balance());
            let working = instance.label().is_good();
            debug!(day, %product, "offer drawn");

            let bought = agent.decide_from_features(&product, instance.features());
            self.settle_day(agent, day, &product, bought, working, &mut trajectory);
        }
        Ok(trajectory)
    }

    /// Shared settlement tail of both loops.
    fn settle_day(
        &self,
        agent: &mut dyn Agent,
        day: usize,
        product: &Product,
        bought: bool,
        working: bool,
        trajectory: &mut Vec<f64>,
    ) {
        let outcome = DayOutcome::resolve(bought, working);
        let balance = agent
            .state_mut()
            .settle(product, outcome, self.config.daily_stipend);
        debug!(day, %outcome, balance, "settled");
        trajectory.push(balance);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use agents::{BeliefThreshold, FlipCoin, PercentValue};
    use types::{Label, MarketOdds};

    fn small_sim() -> Simulation {
        let config = RunConfig::new(MarketOdds::FAIR).with_num_days(50);
        Simulation::new(config).unwrap()
    }

    #[test]
    fn test_invalid_config_rejected_at_build() {
        let config = RunConfig::new(MarketOdds::new(0.0, 1.0));
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_trajectory_length_matches_num_days() {
        let sim = small_sim();
        let mut agent = BeliefThreshold::half("HP");
        assert_eq!(sim.run_no_learning(&mut agent, 0).len(), 50);
    }

    #[test]
    fn test_run_resets_balance() {
        let sim = small_sim();
        let mut agent = PercentValue::new("PB50", 50.0);
        let first = sim.run_no_learning(&mut agent, 1);
        // A second run on the same instance must start from the same
        // initial balance, not the first run's final one.
        let second = sim.run_no_learning(&mut agent, 1);
        assert_eq!(first, second);
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let sim = small_sim();
        let mut a = FlipCoin::new("FC", 42);
        let mut b = FlipCoin::new("FC", 42);
        assert_eq!(sim.run_no_learning(&mut a, 42), sim.run_no_learning(&mut b, 42));
    }

    #[test]
    fn test_never_buying_accumulates_only_stipend() {
        let sim = small_sim();
        let mut agent = PercentValue::new("PB0", 0.0);
        let trajectory = sim.run_no_learning(&mut agent, 5);
        for (index, balance) in trajectory.iter().enumerate() {
            let expected = 1_000.0 + 100.0 * (index as f64 + 1.0);
            assert!((balance - expected).abs() < 1e-9);
        }
        assert_eq!(agent.state().purchases(), 0);
    }

    #[test]
    fn test_learning_trajectory_length_matches_test_fold() {
        let sim = Simulation::new(RunConfig::for_learning(MarketOdds::FAIR)).unwrap();
        let instance = |label| LabeledInstance::new(vec!["f".to_string()], label);
        let train = vec![instance(Label::Good), instance(Label::Bad)];
        let test = vec![
            instance(Label::Good),
            instance(Label::Bad),
            instance(Label::Good),
        ];
        let mut agent = agents::MarketRate::new("RB");
        let trajectory = sim.run_learning(&mut agent, &train, &test, 0).unwrap();
        assert_eq!(trajectory.len(), 3);
    }

    #[test]
    fn test_learning_with_empty_training_fails() {
        let sim = Simulation::new(RunConfig::for_learning(MarketOdds::FAIR)).unwrap();
        let test = vec![LabeledInstance::new(vec![], Label::Good)];
        let mut agent = agents::MarketRate::new("RB");
        let err = sim.run_learning(&mut agent, &[], &test, 0).unwrap_err();
        assert_eq!(err, sim_core::SimError::EmptyTrainingSet);
    }
}
