//! Minimum-rebalance solver and the sufficient-capital allocator.
//!
//! The rebalance is anchored on the position that sits furthest above its
//! target weight: its current value is held fixed and every other position
//! is topped up (or drawn down) so the whole portfolio matches the targets.

use log::debug;

use crate::domain::error::CashflowError;
use crate::domain::weights::{current_weights, highest_positive_deviation, round_to};

/// Amounts within this fraction of the implied total are float noise and
/// count as zero.
pub const NOISE_TOLERANCE: f64 = 1e-12;

/// Signed capital per position that brings the portfolio onto its targets.
///
/// When no position is above target the first position is the anchor.
/// A portfolio already on its targets yields exact zeros.
pub fn minimum_rebalance(values: &[f64], targets: &[f64]) -> Result<Vec<f64>, CashflowError> {
    let weights = current_weights(values)?;
    let anchor = highest_positive_deviation(&weights, targets).unwrap_or(0);
    if targets[anchor] == 0.0 {
        return Err(CashflowError::UnreachableTarget { position: anchor });
    }

    let scaled_total = values[anchor] / targets[anchor];
    debug!("rebalance anchor {anchor}, implied total {scaled_total}");

    let noise = scaled_total * NOISE_TOLERANCE;
    Ok(targets
        .iter()
        .zip(values)
        .map(|(target, value)| {
            let amount = scaled_total * target - value;
            if amount.abs() <= noise { 0.0 } else { amount }
        })
        .collect())
}

/// Whether `capital` covers the summed rebalance amounts.
pub fn is_sufficient(capital: f64, amounts: &[f64]) -> bool {
    let needed: f64 = amounts.iter().sum();
    needed <= capital
}

/// Splits `capital` over the positions when it covers a full rebalance.
///
/// Each position gets its minimum rebalance amount plus an even share of
/// whatever is left, rounded to `precision` places. Rounding is per element,
/// so the total may miss `capital` by up to `count * 0.5 * 10^-precision`.
/// Returns `Ok(None)` when the capital is insufficient.
pub fn allocate(
    capital: f64,
    precision: u32,
    values: &[f64],
    targets: &[f64],
) -> Result<Option<Vec<f64>>, CashflowError> {
    let amounts = minimum_rebalance(values, targets)?;
    if !is_sufficient(capital, &amounts) {
        debug!("capital {capital} does not cover a full rebalance");
        return Ok(None);
    }

    let needed: f64 = amounts.iter().sum();
    let per_position = (capital - needed) / amounts.len() as f64;
    debug!("spreading {per_position} on top of each rebalance amount");

    Ok(Some(
        amounts
            .iter()
            .map(|amount| round_to(amount + per_position, precision))
            .collect(),
    ))
}
