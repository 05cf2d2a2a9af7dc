//! Portfolio configuration validation.
//!
//! Runs before any calculation; every failure names its section and key.

use std::collections::HashSet;

use crate::domain::error::CashflowError;
use crate::domain::portfolio::{DEFAULT_PRECISION, validate};
use crate::ports::config_port::ConfigPort;

pub const SECTION: &str = "portfolio";
pub const MAX_PRECISION: i64 = 12;

pub fn validate_portfolio_config(config: &dyn ConfigPort) -> Result<(), CashflowError> {
    let names = parse_names(config)?;
    let targets = parse_targets(config)?;
    parse_precision(config)?;
    validate_pairing(&names, &targets)?;
    Ok(())
}

pub fn parse_names(config: &dyn ConfigPort) -> Result<Vec<String>, CashflowError> {
    let items = config
        .get_list(SECTION, "names")
        .ok_or_else(|| missing("names"))?;

    let mut names = Vec::with_capacity(items.len());
    let mut seen = HashSet::new();
    for item in items {
        if item.is_empty() {
            return Err(invalid("names", "empty position name in list"));
        }
        if !seen.insert(item.clone()) {
            return Err(invalid("names", format!("duplicate position name: {item}")));
        }
        names.push(item);
    }
    Ok(names)
}

pub fn parse_targets(config: &dyn ConfigPort) -> Result<Vec<f64>, CashflowError> {
    let items = config
        .get_list(SECTION, "targets")
        .ok_or_else(|| missing("targets"))?;

    items
        .iter()
        .map(|item| {
            let weight: f64 = item
                .parse()
                .map_err(|_| invalid("targets", format!("not a number: {item:?}")))?;
            if !(0.0..=1.0).contains(&weight) {
                return Err(invalid(
                    "targets",
                    format!("weight {weight} must be between 0 and 1"),
                ));
            }
            Ok(weight)
        })
        .collect()
}

/// Decimal places for sufficient-capital amounts; absent means the default.
pub fn parse_precision(config: &dyn ConfigPort) -> Result<u32, CashflowError> {
    let Some(raw) = config.get_string(SECTION, "precision") else {
        return Ok(DEFAULT_PRECISION);
    };
    let value: i64 = raw
        .trim()
        .parse()
        .map_err(|_| invalid("precision", format!("not an integer: {raw:?}")))?;
    if !(0..=MAX_PRECISION).contains(&value) {
        return Err(invalid(
            "precision",
            format!("precision must be between 0 and {MAX_PRECISION}"),
        ));
    }
    Ok(value as u32)
}

fn validate_pairing(names: &[String], targets: &[f64]) -> Result<(), CashflowError> {
    if names.len() != targets.len() {
        return Err(invalid(
            "targets",
            format!(
                "{} target weights for {} positions",
                targets.len(),
                names.len()
            ),
        ));
    }
    if !validate(names, targets) {
        let sum: f64 = targets.iter().sum();
        return Err(invalid(
            "targets",
            format!("target weights sum to {sum}, expected 1"),
        ));
    }
    Ok(())
}

fn missing(key: &str) -> CashflowError {
    CashflowError::ConfigMissing {
        section: SECTION.to_string(),
        key: key.to_string(),
    }
}

fn invalid(key: &str, reason: impl Into<String>) -> CashflowError {
    CashflowError::ConfigInvalid {
        section: SECTION.to_string(),
        key: key.to_string(),
        reason: reason.into(),
    }
}
