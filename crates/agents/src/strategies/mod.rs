//! Concrete buying strategies.
//!
//! Each strategy carries only the state it needs: a seeded generator for
//! the coin flipper, a threshold or percentage for the fixed rules, a
//! learned rate for the market-rate estimator.

mod belief_threshold;
mod flip_coin;
mod market_rate;
mod percent_value;

pub use belief_threshold::BeliefThreshold;
pub use flip_coin::FlipCoin;
pub use market_rate::MarketRate;
pub use percent_value::PercentValue;
