//! CLI-level configuration: evaluation mode, market presets, and the
//! canonical strategy roster.

use std::fmt;

use agents::{Agent, BeliefThreshold, FlipCoin, MarketRate, PercentValue};
use clap::ValueEnum;
use types::MarketOdds;

/// Which evaluation harness to run.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Simulate fixed-length runs with oracle quality beliefs.
    NoLearning,
    /// Fold a labeled instance pool and learn before each trial.
    Learning,
}

impl Mode {
    /// Short label for the banner.
    pub fn label(self) -> &'static str {
        match self {
            Mode::NoLearning => "no-learning",
            Mode::Learning => "learning",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named market quality configurations.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarketPreset {
    /// Mostly faulty products: Beta(1, 3).
    Unfavorable,
    /// Even odds: Beta(1, 1).
    Fair,
    /// Mostly working products: Beta(3, 1).
    Favorable,
}

impl MarketPreset {
    /// The preset's distribution shapes.
    pub fn odds(self) -> MarketOdds {
        match self {
            MarketPreset::Unfavorable => MarketOdds::UNFAVORABLE,
            MarketPreset::Fair => MarketOdds::FAIR,
            MarketPreset::Favorable => MarketOdds::FAVORABLE,
        }
    }
}

impl fmt::Display for MarketPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            MarketPreset::Unfavorable => "unfavorable",
            MarketPreset::Fair => "fair",
            MarketPreset::Favorable => "favorable",
        };
        f.write_str(name)
    }
}

/// The canonical no-learning roster: a coin flipper, a better-than-even
/// believer, and the percent-of-value ladder.
///
/// Built fresh per trial; the coin flipper takes the trial seed so its
/// private generator is re-armed alongside the market's.
pub fn no_learning_roster(seed: u64) -> Vec<Box<dyn Agent>> {
    vec![
        Box::new(FlipCoin::new("FC", seed)) as Box<dyn Agent>,
        Box::new(BeliefThreshold::half("HP")),
        Box::new(PercentValue::new("PB0", 0.0)),
        Box::new(PercentValue::new("PB25", 25.0)),
        Box::new(PercentValue::new("PB50", 50.0)),
        Box::new(PercentValue::new("PB75", 75.0)),
        Box::new(PercentValue::new("PB100", 100.0)),
    ]
}

/// The learning roster: the market-rate baseline.
pub fn learning_roster(_seed: u64) -> Vec<Box<dyn Agent>> {
    vec![Box::new(MarketRate::new("RB")) as Box<dyn Agent>]
}
