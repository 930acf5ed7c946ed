//! Core types for the merchant gym simulation.
//!
//! This crate provides the shared data types used across the simulation:
//! the daily product offer, agent identifiers, market quality odds, and
//! labeled historical instances for the learning harness.

use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Agent Identity
// =============================================================================

/// Opaque identifier for a strategy, used only for reporting and grouping.
#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, From,
)]
#[display("{_0}")]
pub struct AgentId(String);

impl AgentId {
    /// Create a new agent id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for AgentId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

// =============================================================================
// Product
// =============================================================================

/// One day's market offer: a resale value and an asking price.
///
/// Both fields are non-negative and `price <= value` holds for every
/// product the market generates (the price is drawn as a fraction of the
/// value). A product has no identity beyond these two numbers; it is
/// created fresh each day and discarded after settlement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// What the product deposits into the buyer's account if it works.
    pub value: f64,
    /// What the buyer pays up front.
    pub price: f64,
}

impl Product {
    /// Create a new product offer.
    pub fn new(value: f64, price: f64) -> Self {
        Self { value, price }
    }

    /// Net gain when the product is bought and turns out to work.
    pub fn margin(&self) -> f64 {
        self.value - self.price
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "product worth {:.2} asking {:.2}", self.value, self.price)
    }
}

// =============================================================================
// Market Quality Odds
// =============================================================================

/// Shape parameters of the Beta distribution over "probability the next
/// product is in working condition". Fixed for the duration of a run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarketOdds {
    /// Alpha shape parameter (must be positive).
    pub alpha: f64,
    /// Beta shape parameter (must be positive).
    pub beta: f64,
}

impl MarketOdds {
    /// A market where most products are faulty.
    pub const UNFAVORABLE: MarketOdds = MarketOdds { alpha: 1.0, beta: 3.0 };

    /// A market with even odds.
    pub const FAIR: MarketOdds = MarketOdds { alpha: 1.0, beta: 1.0 };

    /// A market where most products work.
    pub const FAVORABLE: MarketOdds = MarketOdds { alpha: 3.0, beta: 1.0 };

    /// Create custom odds.
    pub fn new(alpha: f64, beta: f64) -> Self {
        Self { alpha, beta }
    }

    /// Whether both shape parameters are valid Beta parameters.
    pub fn is_valid(&self) -> bool {
        self.alpha > 0.0 && self.beta > 0.0 && self.alpha.is_finite() && self.beta.is_finite()
    }
}

impl Default for MarketOdds {
    fn default() -> Self {
        Self::FAIR
    }
}

impl fmt::Display for MarketOdds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Beta({}, {})", self.alpha, self.beta)
    }
}

// =============================================================================
// Labeled Instances
// =============================================================================

/// Terminal class label of a historical product record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Label {
    /// The product was in working condition.
    #[display("G")]
    Good,
    /// The product was faulty.
    #[display("B")]
    Bad,
}

impl Label {
    /// Parse the single-character class code used in data files.
    pub fn from_code(code: &str) -> Option<Label> {
        match code {
            "G" => Some(Label::Good),
            "B" => Some(Label::Bad),
            _ => None,
        }
    }

    /// Whether this label marks a working product.
    pub fn is_good(self) -> bool {
        matches!(self, Label::Good)
    }
}

/// One historical product record: ordered categorical feature values
/// followed by the terminal class label. Never mutated by the engine.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledInstance {
    features: Vec<String>,
    label: Label,
}

impl LabeledInstance {
    /// Create a new labeled instance.
    pub fn new(features: Vec<String>, label: Label) -> Self {
        Self { features, label }
    }

    /// The feature values, in file order, excluding the label.
    pub fn features(&self) -> &[String] {
        &self.features
    }

    /// The terminal class label.
    pub fn label(&self) -> Label {
        self.label
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_agent_id_display() {
        let id = AgentId::new("PB25");
        assert_eq!(id.to_string(), "PB25");
        assert_eq!(id.as_str(), "PB25");
    }

    #[test]
    fn test_product_margin() {
        let product = Product::new(120.0, 45.0);
        assert!((product.margin() - 75.0).abs() < 1e-12);
    }

    #[test]
    fn test_market_odds_presets() {
        assert_eq!(MarketOdds::UNFAVORABLE, MarketOdds::new(1.0, 3.0));
        assert_eq!(MarketOdds::FAIR, MarketOdds::new(1.0, 1.0));
        assert_eq!(MarketOdds::FAVORABLE, MarketOdds::new(3.0, 1.0));
    }

    #[test]
    fn test_market_odds_validity() {
        assert!(MarketOdds::FAIR.is_valid());
        assert!(MarketOdds::new(0.5, 2.5).is_valid());
        assert!(!MarketOdds::new(0.0, 1.0).is_valid());
        assert!(!MarketOdds::new(1.0, -3.0).is_valid());
        assert!(!MarketOdds::new(f64::NAN, 1.0).is_valid());
    }

    #[test]
    fn test_label_codes() {
        assert_eq!(Label::from_code("G"), Some(Label::Good));
        assert_eq!(Label::from_code("B"), Some(Label::Bad));
        assert_eq!(Label::from_code("X"), None);
        assert_eq!(Label::from_code(""), None);
        assert!(Label::Good.is_good());
        assert!(!Label::Bad.is_good());
    }

    #[test]
    fn test_labeled_instance_accessors() {
        let instance = LabeledInstance::new(
            vec!["red".to_string(), "heavy".to_string()],
            Label::Good,
        );
        assert_eq!(instance.features(), &["red".to_string(), "heavy".to_string()]);
        assert_eq!(instance.label(), Label::Good);
    }
}
