//! Base-currency conversion and report rounding.
//!
//! Every financial aggregate in the panel is summed in the base currency;
//! a per-record exchange rate converts from the record's currency to base.
//! Records with no rate are already in base currency (rate 1, applied at
//! deserialization).

use crate::error::{DomainError, DomainResult};

/// Convert an amount into the base currency.
///
/// The rate must be a finite positive number. Zero and negative *amounts*
/// are allowed (refunds); only the rate is validated.
pub fn normalize(amount: f64, exchange_rate: f64) -> DomainResult<f64> {
    if !exchange_rate.is_finite() || exchange_rate <= 0.0 {
        return Err(DomainError::validation(format!(
            "exchange rate must be a finite positive number, got {exchange_rate}"
        )));
    }
    Ok(amount * exchange_rate)
}

/// Round to one decimal place (report percentages).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
