//! Simulation crate: the evaluation engine for the merchant gym.
//!
//! This crate coordinates everything between a strategy roster and the
//! final report:
//!
//! ```text
//! evaluate_* ──► Simulation loop ──► MarketProcess draws
//!     │              │                    │
//!     │              └──► Agent decision ─┘
//!     │              └──► Settlement ──► balance trajectory
//!     └──► Aggregator ──► AverageReport ──► write_table
//! ```
//!
//! Runs are single-threaded and deterministic: every (strategy, seed)
//! pair owns a freshly seeded generator, so repeating an evaluation
//! reproduces it bit for bit.
//!
//! # Example
//!
//! ```ignore
//! use agents::{Agent, BeliefThreshold, PercentValue};
//! use simulation::{RunConfig, Simulation, evaluate_no_learning, write_table};
//! use types::MarketOdds;
//!
//! let sim = Simulation::new(RunConfig::new(MarketOdds::FAVORABLE))?;
//! let report = evaluate_no_learning(&sim, &[0, 1, 2], |_seed| {
//!     vec![
//!         Box::new(BeliefThreshold::half("HP")) as Box<dyn Agent>,
//!         Box::new(PercentValue::new("PB50", 50.0)),
//!     ]
//! })?;
//! write_table(&report, &mut std::io::stdout())?;
//! ```

pub mod config;
mod aggregator;
mod folds;
mod instances;
mod report;
mod runner;

pub use aggregator::{Aggregator, AverageReport, evaluate_learning, evaluate_no_learning};
pub use config::RunConfig;
pub use folds::{FoldSplit, partition};
pub use instances::read_instances;
pub use report::write_table;
pub use runner::Simulation;
