//! Validation helpers for onboarding input

use rust_decimal::Decimal;
use validator::ValidateEmail;

use collabhub_common::{Error, Result};

/// Trim a required text field, rejecting values that are blank
pub fn require_text(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(Error::Validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Validate and trim an email address
pub fn validate_email(email: &str) -> Result<String> {
    let trimmed = email.trim();
    if !trimmed.validate_email() {
        return Err(Error::Validation("Invalid email format".to_string()));
    }
    Ok(trimmed.to_string())
}

/// Fractional digits a money column keeps
pub const MONEY_SCALE: u32 = 2;

/// Money columns are `NUMERIC(14, 2)`: magnitudes must stay below 10^12
const MONEY_INTEGER_DIGITS: u32 = 12;

/// Whether `value` is stored exactly by a money column
pub fn fits_money_column(value: Decimal) -> bool {
    let ceiling = Decimal::from(10_i64.pow(MONEY_INTEGER_DIGITS));
    value.normalize().scale() <= MONEY_SCALE && value.abs() < ceiling
}

/// Money bounds must be non-negative, storable and ordered
pub fn validate_money_range(field: &str, min: Decimal, max: Decimal) -> Result<()> {
    if min.is_sign_negative() || max.is_sign_negative() {
        return Err(Error::Validation(format!(
            "{} bounds cannot be negative",
            field
        )));
    }
    if !fits_money_column(min) || !fits_money_column(max) {
        return Err(Error::Validation(format!(
            "{} bounds must be below 10^12 with at most {} decimal places",
            field, MONEY_SCALE
        )));
    }
    if min > max {
        return Err(Error::Validation(format!(
            "{} minimum cannot exceed maximum",
            field
        )));
    }
    Ok(())
}

/// Collapse blank optional text to `None`, trimming the rest
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
