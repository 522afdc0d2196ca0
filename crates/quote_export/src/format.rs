//! Locale display formatting
//!
//! Italian conventions throughout: thousands separated by `.`, decimal
//! comma, two fraction digits, trailing euro sign; dates as DD/MM/YYYY.
//! Non-finite amounts are rejected instead of baking "NaN" into a
//! business document.

use crate::error::{ExportError, ExportResult};
use chrono::NaiveDate;

/// Render an amount as an Italian-locale currency string,
/// e.g. `1.234,56 €`. Fails on NaN or infinite input.
pub fn format_currency(amount: f64) -> ExportResult<String> {
    if !amount.is_finite() {
        return Err(ExportError::Formatting(format!(
            "amount is not a finite number: {amount}"
        )));
    }
    let cents = (amount.abs() * 100.0).round() as u64;
    let euros = cents / 100;
    let fraction = cents % 100;
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    Ok(format!(
        "{sign}{},{fraction:02} €",
        group_thousands(euros)
    ))
}

/// Render a date as zero-padded DD/MM/YYYY
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('.');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_zero() {
        assert_eq!(format_currency(0.0).unwrap(), "0,00 €");
    }

    #[test]
    fn test_two_fraction_digits() {
        assert_eq!(format_currency(20.0).unwrap(), "20,00 €");
        assert_eq!(format_currency(9.5).unwrap(), "9,50 €");
        assert_eq!(format_currency(0.07).unwrap(), "0,07 €");
    }

    #[test]
    fn test_thousands_grouping() {
        assert_eq!(format_currency(1234.56).unwrap(), "1.234,56 €");
        assert_eq!(format_currency(1_000_000.0).unwrap(), "1.000.000,00 €");
        assert_eq!(format_currency(999.99).unwrap(), "999,99 €");
    }

    #[test]
    fn test_rounding_to_cents() {
        assert_eq!(format_currency(10.005).unwrap(), "10,01 €");
        assert_eq!(format_currency(10.004).unwrap(), "10,00 €");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(format_currency(-1234.5).unwrap(), "-1.234,50 €");
        // -0.0 carries no sign
        assert_eq!(format_currency(-0.0).unwrap(), "0,00 €");
    }

    #[test]
    fn test_non_finite_rejected() {
        assert!(matches!(
            format_currency(f64::NAN),
            Err(ExportError::Formatting(_))
        ));
        assert!(matches!(
            format_currency(f64::INFINITY),
            Err(ExportError::Formatting(_))
        ));
    }

    #[test]
    fn test_date_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2026, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2026");
    }

    #[test]
    fn test_date_end_of_year() {
        let date = NaiveDate::from_ymd_opt(2025, 12, 31).unwrap();
        assert_eq!(format_date(date), "31/12/2025");
    }

    proptest! {
        #[test]
        fn prop_always_two_fraction_digits(cents in 0u64..100_000_000) {
            let formatted = format_currency(cents as f64 / 100.0).unwrap();
            let (_, fraction) = formatted.split_once(',').unwrap();
            prop_assert_eq!(fraction.len(), "00 €".len());
        }

        #[test]
        fn prop_grouping_round_trips(cents in 0u64..100_000_000) {
            let formatted = format_currency(cents as f64 / 100.0).unwrap();
            let digits: String = formatted
                .chars()
                .filter(|c| c.is_ascii_digit())
                .collect();
            prop_assert_eq!(digits.parse::<u64>().unwrap(), cents);
        }
    }
}
