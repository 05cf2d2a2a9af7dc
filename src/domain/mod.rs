//! Rebalancing engine: pure calculations over position values and target weights.

pub mod position;
pub mod portfolio;
pub mod weights;
pub mod rebalance;
pub mod greedy;
pub mod plan;
pub mod config_validation;
pub mod error;
