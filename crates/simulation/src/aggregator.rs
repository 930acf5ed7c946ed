//! Cross-seed aggregation and the evaluation drivers.
//!
//! Trajectories are folded into per-day sums as they arrive — no run's
//! trajectory is retained — and divided by the run count at the end.
//! Strategy insertion order is preserved so reports read in roster order.

use agents::Agent;
use sim_core::{Result, SimError};
use types::{AgentId, LabeledInstance};

use crate::folds::partition;
use crate::runner::Simulation;

/// Incremental per-day, per-strategy balance averaging.
#[derive(Debug, Clone)]
pub struct Aggregator {
    runs_per_strategy: usize,
    entries: Vec<(AgentId, Vec<f64>)>,
}

impl Aggregator {
    /// Create an aggregator expecting `runs_per_strategy` trajectories
    /// per strategy (one per seed/fold).
    pub fn new(runs_per_strategy: usize) -> Result<Self> {
        if runs_per_strategy == 0 {
            return Err(SimError::NoSeeds);
        }
        Ok(Self {
            runs_per_strategy,
            entries: Vec::new(),
        })
    }

    /// Fold one trajectory into the running sums.
    ///
    /// All trajectories recorded for one strategy must be the same
    /// length; a mismatch is a fatal bookkeeping violation.
    pub fn record(&mut self, id: &AgentId, trajectory: &[f64]) -> Result<()> {
        match self.entries.iter_mut().find(|(entry_id, _)| entry_id == id) {
            Some((_, sums)) => {
                if sums.len() != trajectory.len() {
                    return Err(SimError::TrajectoryLengthMismatch {
                        agent: id.to_string(),
                        expected: sums.len(),
                        actual: trajectory.len(),
                    });
                }
                for (sum, balance) in sums.iter_mut().zip(trajectory) {
                    *sum += balance;
                }
            }
            None => {
                self.entries.push((id.clone(), trajectory.to_vec()));
            }
        }
        Ok(())
    }

    /// Divide the sums by the run count and produce the report.
    pub fn finish(self) -> AverageReport {
        let runs = self.runs_per_strategy as f64;
        let entries = self
            .entries
            .into_iter()
            .map(|(id, sums)| {
                let averages = sums.into_iter().map(|sum| sum / runs).collect();
                (id, averages)
            })
            .collect();
        AverageReport { entries }
    }
}

/// Per-day average balances, one column per strategy, in roster order.
#[derive(Debug, Clone, PartialEq)]
pub struct AverageReport {
    entries: Vec<(AgentId, Vec<f64>)>,
}

impl AverageReport {
    /// The (strategy id, per-day averages) columns.
    pub fn entries(&self) -> &[(AgentId, Vec<f64>)] {
        &self.entries
    }

    /// Number of day rows (zero for an empty report).
    pub fn num_days(&self) -> usize {
        self.entries.first().map_or(0, |(_, days)| days.len())
    }
}

/// Run every strategy once per seed through the no-learning loop and
/// average the trajectories.
///
/// `roster` builds a fresh strategy set per trial, so strategy-internal
/// generators can be re-seeded the way the balance is reset.
pub fn evaluate_no_learning<F>(
    sim: &Simulation,
    seeds: &[u64],
    mut roster: F,
) -> Result<AverageReport>
where
    F: FnMut(u64) -> Vec<Box<dyn Agent>>,
{
    if seeds.is_empty() {
        return Err(SimError::NoSeeds);
    }
    let mut aggregator = Aggregator::new(seeds.len())?;
    for &seed in seeds {
        for mut agent in roster(seed) {
            let trajectory = sim.run_no_learning(agent.as_mut(), seed);
            aggregator.record(agent.id(), &trajectory)?;
        }
    }
    Ok(aggregator.finish())
}

/// Cut the pool into one fold per seed, run every strategy once per fold
/// through the learning loop, and average the trajectories.
pub fn evaluate_learning<F>(
    sim: &Simulation,
    pool: &[LabeledInstance],
    seeds: &[u64],
    mut roster: F,
) -> Result<AverageReport>
where
    F: FnMut(u64) -> Vec<Box<dyn Agent>>,
{
    if seeds.is_empty() {
        return Err(SimError::NoSeeds);
    }
    let splits = partition(pool, seeds.len())?;
    let mut aggregator = Aggregator::new(seeds.len())?;
    for (split, &seed) in splits.iter().zip(seeds) {
        for mut agent in roster(seed) {
            let trajectory = sim.run_learning(agent.as_mut(), &split.train, &split.test, seed)?;
            aggregator.record(agent.id(), &trajectory)?;
        }
    }
    Ok(aggregator.finish())
}
