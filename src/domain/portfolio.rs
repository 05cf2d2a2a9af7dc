//! Portfolio definition: position names paired with target weights.

/// Absolute tolerance applied when checking that target weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;

pub const DEFAULT_CURRENCY: &str = "€";
pub const DEFAULT_PRECISION: u32 = 3;

#[derive(Debug, Clone, PartialEq)]
pub struct PortfolioConfig {
    pub currency: String,
    /// Decimal places kept when splitting sufficient capital.
    pub precision: u32,
    pub names: Vec<String>,
    pub targets: Vec<f64>,
}

impl PortfolioConfig {
    pub fn new(names: Vec<String>, targets: Vec<f64>) -> Self {
        PortfolioConfig {
            currency: DEFAULT_CURRENCY.to_string(),
            precision: DEFAULT_PRECISION,
            names,
            targets,
        }
    }

    pub fn position_count(&self) -> usize {
        self.names.len()
    }
}

impl Default for PortfolioConfig {
    /// Five world-equity ETFs held in equal 20% slices.
    fn default() -> Self {
        let names = [
            "iShares MSCI World Small Cap",
            "iShares Core MSCI EM IMI",
            "xTrackers MSCI World Value",
            "xTrackers MSCI World Quality",
            "xTrackers MSCI World Momentum",
        ];
        PortfolioConfig::new(
            names.iter().map(|n| n.to_string()).collect(),
            vec![0.20; names.len()],
        )
    }
}

/// Checks that every position has a target weight and that the weights sum to one.
pub fn validate<S: AsRef<str>>(positions: &[S], targets: &[f64]) -> bool {
    if positions.len() != targets.len() {
        return false;
    }
    let sum: f64 = targets.iter().sum();
    (sum - 1.0).abs() <= WEIGHT_SUM_TOLERANCE
}
