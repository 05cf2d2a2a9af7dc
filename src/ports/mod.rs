//! Port traits: the shell boundary around the rebalancing engine.

pub mod config_port;
pub mod input_port;
pub mod report_port;
