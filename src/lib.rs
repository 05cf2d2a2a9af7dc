//! cashflow — cash-flow portfolio rebalancing calculator.
//!
//! Hexagonal architecture: the pure rebalancing engine in [`domain`], port
//! traits in [`ports`], concrete implementations in [`adapters`], and the
//! command line in [`cli`].

pub mod domain;
pub mod ports;
pub mod adapters;
pub mod cli;
