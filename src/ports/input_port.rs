//! Validated user input port.

use crate::domain::error::CashflowError;

pub trait InputPort {
    /// Reads a non-negative amount, asking again until the answer is valid.
    fn read_amount(&mut self, prompt: &str) -> Result<f64, CashflowError>;
    fn confirm(&mut self, prompt: &str) -> Result<bool, CashflowError>;
}

/// Parses a non-negative finite amount, e.g. `"1250"` or `" 99.5 "`.
pub fn parse_amount(input: &str) -> Result<f64, CashflowError> {
    let trimmed = input.trim();
    let value: f64 = trimmed
        .parse()
        .map_err(|_| CashflowError::invalid_input("amount", format!("{trimmed:?} is not a number")))?;
    if !value.is_finite() {
        return Err(CashflowError::invalid_input(
            "amount",
            format!("{trimmed:?} is not a finite number"),
        ));
    }
    if value < 0.0 {
        return Err(CashflowError::invalid_input(
            "amount",
            "amount must not be negative",
        ));
    }
    Ok(value)
}

/// Parses a comma-separated list of amounts, e.g. `"100, 250.5, 0"`.
pub fn parse_amounts(input: &str) -> Result<Vec<f64>, CashflowError> {
    input.split(',').map(parse_amount).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_whole_and_decimal_amounts() {
        assert_eq!(parse_amount("1250").unwrap(), 1250.0);
        assert_eq!(parse_amount(" 99.5 ").unwrap(), 99.5);
        assert_eq!(parse_amount("0").unwrap(), 0.0);
    }

    #[test]
    fn rejects_text() {
        let err = parse_amount("lots").unwrap_err();
        assert!(matches!(err, CashflowError::InvalidInput { .. }));
    }

    #[test]
    fn rejects_negative() {
        let err = parse_amount("-5").unwrap_err();
        assert!(
            matches!(err, CashflowError::InvalidInput { reason, .. } if reason.contains("negative"))
        );
    }

    #[test]
    fn rejects_infinity_and_nan() {
        assert!(parse_amount("inf").is_err());
        assert!(parse_amount("NaN").is_err());
    }

    #[test]
    fn parses_list() {
        assert_eq!(parse_amounts("100, 250.5,0").unwrap(), vec![100.0, 250.5, 0.0]);
        assert!(parse_amounts("100,,5").is_err());
    }
}
