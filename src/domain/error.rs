//! Domain error types.

/// Top-level error type for cashflow.
#[derive(Debug, thiserror::Error)]
pub enum CashflowError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("missing config key [{section}] {key}")]
    ConfigMissing { section: String, key: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("invalid input for {field}: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("portfolio has no value to distribute (total is zero)")]
    EmptyPortfolio,

    #[error("position {position} has a zero target weight and cannot anchor a rebalance")]
    UnreachableTarget { position: usize },

    #[error("no position is above its target weight; greedy allocation has no anchor")]
    NoPositiveDeviation,

    #[error("input prompt failed: {0}")]
    Prompt(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CashflowError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        CashflowError::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<&CashflowError> for std::process::ExitCode {
    fn from(err: &CashflowError) -> Self {
        let code: u8 = match err {
            CashflowError::Io(_) | CashflowError::Prompt(_) => 1,
            CashflowError::ConfigParse { .. }
            | CashflowError::ConfigMissing { .. }
            | CashflowError::ConfigInvalid { .. } => 2,
            CashflowError::InvalidInput { .. } => 3,
            CashflowError::EmptyPortfolio
            | CashflowError::UnreachableTarget { .. }
            | CashflowError::NoPositiveDeviation => 4,
        };
        std::process::ExitCode::from(code)
    }
}
