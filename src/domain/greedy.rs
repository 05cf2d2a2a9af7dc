//! Greedy allocation of whole currency units when capital is short.
//!
//! The ideal portfolio is the fully rebalanced one anchored on the position
//! furthest above target. Capital is then handed out one unit at a time to
//! whichever position is furthest, in absolute terms, from its ideal value.
//! Ties go to the lowest index.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::debug;

use crate::domain::error::CashflowError;
use crate::domain::weights::{highest_positive_deviation, raw_weights};

/// Largest magnitude at which an `f64` still counts every whole unit.
pub const MAX_EXACT_UNITS: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq)]
pub struct GreedyAllocation {
    /// Units added to each position.
    pub delta: Vec<f64>,
    pub new_values: Vec<f64>,
}

/// Heap entry ordered by distance from ideal, then by lowest index.
#[derive(Debug, Clone, Copy)]
struct Gap {
    distance: f64,
    index: usize,
}

impl PartialEq for Gap {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Gap {}

impl PartialOrd for Gap {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Gap {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .total_cmp(&other.distance)
            .then_with(|| other.index.cmp(&self.index))
    }
}

/// Hands out `capital` whole units across the positions.
///
/// Requires at least one position above its target weight; a portfolio
/// already on (or nowhere above) target has no anchor for the ideal.
/// Runs one heap step per unit, and every position plus `capital` must stay
/// within [`MAX_EXACT_UNITS`].
pub fn allocate_greedy(
    values: &[f64],
    targets: &[f64],
    capital: u64,
) -> Result<GreedyAllocation, CashflowError> {
    let weights = raw_weights(values)?;
    let anchor =
        highest_positive_deviation(&weights, targets).ok_or(CashflowError::NoPositiveDeviation)?;
    if targets[anchor] == 0.0 {
        return Err(CashflowError::UnreachableTarget { position: anchor });
    }

    let largest = values.iter().copied().fold(0.0, f64::max);
    if largest + capital as f64 >= MAX_EXACT_UNITS {
        return Err(CashflowError::invalid_input(
            "capital",
            "too large to hand out in whole units",
        ));
    }

    let ideal_total = values[anchor] / targets[anchor];
    let ideal: Vec<f64> = targets.iter().map(|t| ideal_total * t).collect();
    debug!("greedy anchor {anchor}, ideal total {ideal_total}, {capital} units");

    let mut working = values.to_vec();
    let mut heap: BinaryHeap<Gap> = working
        .iter()
        .zip(&ideal)
        .enumerate()
        .map(|(index, (w, i))| Gap {
            distance: (w - i).abs(),
            index,
        })
        .collect();

    for _ in 0..capital {
        let Some(Gap { index, .. }) = heap.pop() else {
            break;
        };
        working[index] += 1.0;
        heap.push(Gap {
            distance: (working[index] - ideal[index]).abs(),
            index,
        });
    }

    let delta = working.iter().zip(values).map(|(w, v)| w - v).collect();
    Ok(GreedyAllocation {
        delta,
        new_values: working,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Straight unit-by-unit scan, used to check the heap keeps the same picks.
    fn allocate_by_scan(values: &[f64], targets: &[f64], capital: u64) -> Vec<f64> {
        let weights = raw_weights(values).unwrap();
        let anchor = highest_positive_deviation(&weights, targets).unwrap();
        let total = values[anchor] / targets[anchor];
        let ideal: Vec<f64> = targets.iter().map(|t| total * t).collect();
        let mut working = values.to_vec();
        for _ in 0..capital {
            let mut best = 0;
            for i in 1..working.len() {
                if (working[i] - ideal[i]).abs() > (working[best] - ideal[best]).abs() {
                    best = i;
                }
            }
            working[best] += 1.0;
        }
        working
    }

    #[test]
    fn fills_the_largest_gap_first() {
        let alloc = allocate_greedy(&[50.0, 100.0, 100.0, 100.0, 100.0], &[0.2; 5], 10).unwrap();
        assert_eq!(alloc.delta, vec![10.0, 0.0, 0.0, 0.0, 0.0]);
        assert_eq!(alloc.new_values, vec![60.0, 100.0, 100.0, 100.0, 100.0]);
    }

    #[test]
    fn alternates_between_equal_gaps() {
        // ideal is 200 each, positions 1 and 2 both 100 short
        let alloc = allocate_greedy(&[200.0, 100.0, 100.0], &[1.0 / 3.0; 3], 5).unwrap();
        assert_eq!(alloc.delta, vec![0.0, 3.0, 2.0]);
    }

    #[test]
    fn zero_capital_changes_nothing() {
        let alloc = allocate_greedy(&[50.0, 100.0], &[0.5, 0.5], 0).unwrap();
        assert_eq!(alloc.delta, vec![0.0, 0.0]);
        assert_eq!(alloc.new_values, vec![50.0, 100.0]);
    }

    #[test]
    fn delta_sums_to_capital() {
        let alloc = allocate_greedy(&[120.0, 35.0, 80.0, 10.0], &[0.4, 0.3, 0.2, 0.1], 57).unwrap();
        assert_eq!(alloc.delta.iter().sum::<f64>(), 57.0);
        assert!(alloc.delta.iter().all(|d| *d >= 0.0));
    }

    #[test]
    fn matches_unit_by_unit_scan() {
        let cases: [(&[f64], &[f64], u64); 3] = [
            (&[120.0, 35.0, 80.0, 10.0], &[0.4, 0.3, 0.2, 0.1], 57),
            (&[7.0, 3.0, 11.0], &[0.25, 0.25, 0.5], 40),
            (&[1000.0, 1.0, 1.0, 1.0], &[0.25; 4], 3000),
        ];
        for (values, targets, capital) in cases {
            let alloc = allocate_greedy(values, targets, capital).unwrap();
            assert_eq!(alloc.new_values, allocate_by_scan(values, targets, capital));
        }
    }

    #[test]
    fn balanced_portfolio_has_no_anchor() {
        let err = allocate_greedy(&[100.0, 100.0], &[0.5, 0.5], 10).unwrap_err();
        assert!(matches!(err, CashflowError::NoPositiveDeviation));
    }

    #[test]
    fn units_beyond_exact_float_range_fail() {
        let err = allocate_greedy(&[50.0, 100.0], &[0.5, 0.5], 1 << 53).unwrap_err();
        assert!(matches!(err, CashflowError::InvalidInput { field, .. } if field == "capital"));

        let err = allocate_greedy(&[MAX_EXACT_UNITS, 1.0], &[0.5, 0.5], 1).unwrap_err();
        assert!(matches!(err, CashflowError::InvalidInput { .. }));
    }

    #[test]
    fn empty_portfolio_fails() {
        let err = allocate_greedy(&[0.0, 0.0], &[0.5, 0.5], 10).unwrap_err();
        assert!(matches!(err, CashflowError::EmptyPortfolio));
    }
}
