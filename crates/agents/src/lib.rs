//! Agents crate: buying strategies for the merchant gym.
//!
//! This crate provides:
//! - The `Agent` trait every strategy must implement
//! - `AgentState` for balance tracking and settlement
//! - Concrete strategy implementations (`strategies` module)
//!
//! # Architecture
//! Each simulated day the engine hands an agent a product offer plus a
//! quality belief (or the product's feature vector, in learning mode) and
//! receives a buy/no-buy decision. Settlement then mutates the agent's
//! balance through `AgentState`. Agents never see the product's true
//! condition before deciding.
//!
//! # Available strategies
//! - [`strategies::FlipCoin`] - ignores everything, flips a seeded coin
//! - [`strategies::BeliefThreshold`] - buys when the belief clears a bar
//! - [`strategies::PercentValue`] - buys when the price is a small enough
//!   fraction of the value
//! - [`strategies::MarketRate`] - learns a global good-product rate and
//!   buys on expected value

mod state;
pub mod strategies;
mod traits;

pub use state::AgentState;
pub use strategies::{BeliefThreshold, FlipCoin, MarketRate, PercentValue};
pub use traits::Agent;
