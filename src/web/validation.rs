use bigdecimal::BigDecimal;
use chrono::NaiveDate;
use std::str::FromStr;

use crate::web::error::WebError;

pub fn require_field(value: &str, field_name: &str) -> Result<String, WebError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(WebError::validation(format!("{} is required", field_name)));
    }
    Ok(trimmed.to_string())
}

/// Parse a decimal amount. Sign is not checked here; some callers accept
/// negatives (expense amounts) while others reject them separately.
pub fn parse_amount(value: &str, field_name: &str) -> Result<BigDecimal, WebError> {
    BigDecimal::from_str(value.trim())
        .map_err(|_| WebError::validation(format!("{} must be a number", field_name)))
}

pub fn parse_date(value: &str) -> Result<NaiveDate, WebError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| WebError::validation("Date must be in YYYY-MM-DD format"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_field_trims() {
        assert_eq!(require_field("  groceries ", "Category").unwrap(), "groceries");
        assert!(require_field("   ", "Category").is_err());
    }

    #[test]
    fn test_parse_amount_accepts_negatives() {
        assert_eq!(
            parse_amount("-10.50", "Amount").unwrap(),
            BigDecimal::from_str("-10.50").unwrap()
        );
    }

    #[test]
    fn test_parse_amount_rejects_junk() {
        assert!(parse_amount("ten", "Amount").is_err());
        assert!(parse_amount("", "Amount").is_err());
    }

    #[test]
    fn test_parse_date() {
        assert_eq!(
            parse_date("2025-02-28").unwrap(),
            NaiveDate::from_ymd_opt(2025, 2, 28).unwrap()
        );
        assert!(parse_date("28/02/2025").is_err());
    }
}
