//! One full rebalancing session: everything the report tables need.
//!
//! An [`Assessment`] covers what is known from the position values alone;
//! [`Assessment::allocate`] adds the new capital on top of it.

use log::info;

use crate::domain::error::CashflowError;
use crate::domain::greedy::{GreedyAllocation, allocate_greedy};
use crate::domain::portfolio::PortfolioConfig;
use crate::domain::position::{Holding, holdings_from_values, holdings_with_weights};
use crate::domain::rebalance::{allocate, minimum_rebalance};
use crate::domain::weights::current_weights;

/// How the new capital was spread.
#[derive(Debug, Clone, PartialEq)]
pub enum AllocationOutcome {
    /// Capital covered a full rebalance; amounts per position.
    Sufficient(Vec<f64>),
    /// Capital fell short; whole units handed out greedily.
    Greedy(GreedyAllocation),
}

impl AllocationOutcome {
    pub fn amounts(&self) -> &[f64] {
        match self {
            AllocationOutcome::Sufficient(amounts) => amounts,
            AllocationOutcome::Greedy(alloc) => &alloc.delta,
        }
    }

    pub fn is_sufficient(&self) -> bool {
        matches!(self, AllocationOutcome::Sufficient(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Assessment {
    pub config: PortfolioConfig,
    pub values: Vec<f64>,
    pub current: Vec<Holding>,
    pub minimum_amounts: Vec<f64>,
    pub minimum_total: f64,
    /// Portfolio after investing exactly the minimum amounts.
    pub fully_rebalanced: Vec<Holding>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Allocation {
    pub capital: f64,
    pub outcome: AllocationOutcome,
    /// Fractional capital the greedy path could not place.
    pub uninvested: f64,
    pub after: Vec<Holding>,
}

impl Allocation {
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.after.iter().map(|h| h.name.as_str())
    }
}

impl Assessment {
    pub fn build(config: &PortfolioConfig, values: &[f64]) -> Result<Self, CashflowError> {
        if values.len() != config.position_count() {
            return Err(CashflowError::invalid_input(
                "values",
                format!(
                    "expected {} position values, got {}",
                    config.position_count(),
                    values.len()
                ),
            ));
        }
        if let Some(bad) = values.iter().find(|v| !v.is_finite() || **v < 0.0) {
            return Err(CashflowError::invalid_input(
                "values",
                format!("{bad} is not a non-negative number"),
            ));
        }

        let targets = &config.targets;
        let minimum_amounts = minimum_rebalance(values, targets)?;
        let minimum_total: f64 = minimum_amounts.iter().sum();
        let full_values: Vec<f64> = values
            .iter()
            .zip(&minimum_amounts)
            .map(|(v, a)| v + a)
            .collect();

        Ok(Assessment {
            config: config.clone(),
            values: values.to_vec(),
            current: holdings_from_values(&config.names, values),
            fully_rebalanced: holdings_with_weights(&config.names, &full_values, targets),
            minimum_amounts,
            minimum_total,
        })
    }

    /// Spreads `capital`, falling back to whole-unit greedy allocation when
    /// it does not cover the minimum total.
    pub fn allocate(&self, capital: f64) -> Result<Allocation, CashflowError> {
        if !capital.is_finite() || capital < 0.0 {
            return Err(CashflowError::invalid_input(
                "capital",
                "must be a non-negative number",
            ));
        }

        let names = &self.config.names;
        let targets = &self.config.targets;
        let values = &self.values;

        let (outcome, uninvested) = match allocate(capital, self.config.precision, values, targets)?
        {
            Some(amounts) => (AllocationOutcome::Sufficient(amounts), 0.0),
            None => {
                let units = capital.floor();
                info!(
                    "capital {capital} short of {}, allocating {units} whole units",
                    self.minimum_total
                );
                let alloc = allocate_greedy(values, targets, units as u64)?;
                (AllocationOutcome::Greedy(alloc), capital - units)
            }
        };

        let after = match &outcome {
            AllocationOutcome::Sufficient(amounts) => {
                let after_values: Vec<f64> =
                    values.iter().zip(amounts).map(|(v, a)| v + a).collect();
                holdings_with_weights(names, &after_values, targets)
            }
            AllocationOutcome::Greedy(alloc) => {
                let weights = current_weights(&alloc.new_values)?;
                holdings_with_weights(names, &alloc.new_values, &weights)
            }
        };

        Ok(Allocation {
            capital,
            outcome,
            uninvested,
            after,
        })
    }
}

/// Assessment and allocation of a single session.
#[derive(Debug, Clone, PartialEq)]
pub struct RebalancePlan {
    pub assessment: Assessment,
    pub allocation: Allocation,
}

impl RebalancePlan {
    pub fn build(
        config: &PortfolioConfig,
        values: &[f64],
        capital: f64,
    ) -> Result<Self, CashflowError> {
        let assessment = Assessment::build(config, values)?;
        let allocation = assessment.allocate(capital)?;
        Ok(RebalancePlan {
            assessment,
            allocation,
        })
    }
}
