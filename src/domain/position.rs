//! Position rows as shown in reports.

/// A position as shown in a report: value plus its share of the portfolio.
#[derive(Debug, Clone, PartialEq)]
pub struct Holding {
    pub name: String,
    pub value: f64,
    /// Fraction of the portfolio, 0..=1.
    pub weight: f64,
}

pub fn total_value(holdings: &[Holding]) -> f64 {
    holdings.iter().map(|h| h.value).sum()
}

/// Pairs names with values, weighting each by its raw share of the total.
///
/// A zero total yields zero weights; callers that need a defined
/// distribution go through [`crate::domain::weights::current_weights`].
pub fn holdings_from_values(names: &[String], values: &[f64]) -> Vec<Holding> {
    let total: f64 = values.iter().sum();
    names
        .iter()
        .zip(values)
        .map(|(name, &value)| Holding {
            name: name.clone(),
            value,
            weight: if total > 0.0 { value / total } else { 0.0 },
        })
        .collect()
}

/// Pairs names with values and an explicit weight per position.
pub fn holdings_with_weights(names: &[String], values: &[f64], weights: &[f64]) -> Vec<Holding> {
    names
        .iter()
        .zip(values.iter().zip(weights))
        .map(|(name, (&value, &weight))| Holding {
            name: name.clone(),
            value,
            weight,
        })
        .collect()
}
