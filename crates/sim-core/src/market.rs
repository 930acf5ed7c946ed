//! Daily market generation.
//!
//! Each day the market offers one product whose value is uniform in
//! `[0, min(balance, value_cap))` and whose price is uniform in
//! `[0, value)` — the price never exceeds the value, so all risk comes
//! from the working-condition uncertainty. The day's quality probability
//! is drawn from a Beta distribution and the true condition from a
//! uniform draw against it.
//!
//! Draw order is the reproducibility contract: value, price, then (in
//! no-learning mode) quality probability and condition draw, all from the
//! single per-run generator. Two runs with the same seed see bit-identical
//! markets regardless of which strategy is being evaluated.

use rand::Rng;
use rand_distr::{Beta, Distribution};
use types::{MarketOdds, Product};

use crate::error::{Result, SimError};

/// Generates one day's product offer and condition draw.
///
/// Construction validates the odds once, so the per-day draw path has no
/// failure modes.
#[derive(Debug, Clone)]
pub struct MarketProcess {
    odds: MarketOdds,
    value_cap: f64,
    quality: Beta<f64>,
}

impl MarketProcess {
    /// Create a market process for the given odds and product value cap.
    ///
    /// Fails with `SimError::InvalidOdds` when either shape parameter is
    /// non-positive.
    pub fn new(odds: MarketOdds, value_cap: f64) -> Result<Self> {
        if !odds.is_valid() {
            return Err(SimError::InvalidOdds {
                alpha: odds.alpha,
                beta: odds.beta,
            });
        }
        let quality = Beta::new(odds.alpha, odds.beta).map_err(|_| SimError::InvalidOdds {
            alpha: odds.alpha,
            beta: odds.beta,
        })?;
        Ok(Self {
            odds,
            value_cap,
            quality,
        })
    }

    /// The configured market odds.
    pub fn odds(&self) -> MarketOdds {
        self.odds
    }

    /// The configured product value cap.
    pub fn value_cap(&self) -> f64 {
        self.value_cap
    }

    /// Draw the day's product: value first, then price.
    ///
    /// The value range is capped by the agent's current balance and the
    /// configured maximum, floored at zero so a negative balance yields a
    /// zero-value offer rather than an invalid range.
    pub fn next_product<R: Rng + ?Sized>(&self, rng: &mut R, balance: f64) -> Product {
        let max_value = balance.min(self.value_cap).max(0.0);
        let value = rng.random::<f64>() * max_value;
        let price = rng.random::<f64>() * value;
        Product::new(value, price)
    }

    /// Draw the day's quality probability and true condition.
    ///
    /// Returns `(probability, is_working)`. The probability is the exact
    /// Beta variate for the day — the oracle belief handed to no-learning
    /// agents.
    pub fn next_condition<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, bool) {
        let prob = self.quality.sample(rng);
        let working = rng.random::<f64>() <= prob;
        (prob, working)
    }
}
