//! Weight distribution of a set of position values.

use crate::domain::error::CashflowError;

/// Decimal places kept in a reported weight.
pub const WEIGHT_DECIMALS: u32 = 8;

/// Rounds `value` to `decimals` places after the point, halves to even.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round_ties_even() / factor
}

/// Each value's share of the total, unrounded.
pub fn raw_weights(values: &[f64]) -> Result<Vec<f64>, CashflowError> {
    let total: f64 = values.iter().sum();
    if total == 0.0 {
        return Err(CashflowError::EmptyPortfolio);
    }
    Ok(values.iter().map(|v| v / total).collect())
}

/// Each value's share of the total, rounded to [`WEIGHT_DECIMALS`] places.
pub fn current_weights(values: &[f64]) -> Result<Vec<f64>, CashflowError> {
    Ok(raw_weights(values)?
        .into_iter()
        .map(|w| round_to(w, WEIGHT_DECIMALS))
        .collect())
}

/// First index holding the greatest strictly positive `weight - target`.
///
/// Later equal deviations never replace an earlier one.
pub fn highest_positive_deviation(weights: &[f64], targets: &[f64]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (i, (w, t)) in weights.iter().zip(targets).enumerate() {
        let deviation = w - t;
        if deviation <= 0.0 {
            continue;
        }
        match best {
            Some((_, max)) if deviation <= max => {}
            _ => best = Some((i, deviation)),
        }
    }
    best.map(|(i, _)| i)
}
