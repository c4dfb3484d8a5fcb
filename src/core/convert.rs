//! Amount conversion and input validation

use crate::core::rates::RateTable;
use std::fmt::Display;

/// Reasons a conversion request is rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    #[error("Empty input")]
    EmptyAmount,

    #[error("Invalid amount: '{0}'")]
    InvalidAmount(String),

    #[error("Currency not selected")]
    CurrencyNotSelected,

    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    EmptyAmount,
    InvalidAmount,
    CurrencyNotSelected,
    UnknownCurrency,
}

impl ConversionError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConversionError::EmptyAmount => ErrorKind::EmptyAmount,
            ConversionError::InvalidAmount(_) => ErrorKind::InvalidAmount,
            ConversionError::CurrencyNotSelected => ErrorKind::CurrencyNotSelected,
            ConversionError::UnknownCurrency(_) => ErrorKind::UnknownCurrency,
        }
    }
}

/// A completed conversion.
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub amount: f64,
    pub from: String,
    pub to: String,
    pub converted: f64,
}

impl Conversion {
    /// Text shown to the user and recorded in the history log.
    pub fn display(&self) -> String {
        self.to_string()
    }
}

impl Display for Conversion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{:.2} {} = {:.2} {}",
            self.amount, self.from, self.converted, self.to
        )
    }
}

/// Converts `amount_text` from one currency to another.
///
/// Checks run in a fixed order and the first failure is returned: blank
/// amount, unparseable or non-finite amount, missing selection, then codes
/// absent from `table`. Identical currencies return the amount untouched;
/// any other pair goes through the base currency.
pub fn convert(
    table: &RateTable,
    amount_text: &str,
    from: &str,
    to: &str,
) -> Result<Conversion, ConversionError> {
    let amount_text = amount_text.trim();
    if amount_text.is_empty() {
        return Err(ConversionError::EmptyAmount);
    }

    let amount = amount_text
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite())
        .ok_or_else(|| ConversionError::InvalidAmount(amount_text.to_string()))?;

    if from.is_empty() || to.is_empty() {
        return Err(ConversionError::CurrencyNotSelected);
    }

    let from_rate = table.rate_of(from)?;
    let to_rate = table.rate_of(to)?;

    let converted = if from == to {
        amount
    } else {
        let base_amount = amount / from_rate;
        base_amount * to_rate
    };

    Ok(Conversion {
        amount,
        from: from.to_string(),
        to: to.to_string(),
        converted,
    })
}

/// Exchanges a `(from, to)` selection.
pub fn swap<T>(from: T, to: T) -> (T, T) {
    (to, from)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn usd_inr() -> RateTable {
        RateTable::new([("USD", 1.0), ("INR", 83.0)]).unwrap()
    }

    #[test]
    fn test_convert_usd_to_inr() {
        let result = convert(&usd_inr(), "100", "USD", "INR").unwrap();
        assert_eq!(result.amount, 100.0);
        assert_eq!(result.converted, 8300.0);
        assert_eq!(result.display(), "100.00 USD = 8300.00 INR");
    }

    #[test]
    fn test_convert_inr_to_usd() {
        let result = convert(&usd_inr(), "83", "INR", "USD").unwrap();
        assert_eq!(result.converted, 1.0);
        assert_eq!(result.display(), "83.00 INR = 1.00 USD");
    }

    #[test]
    fn test_identity_conversion_is_exact() {
        let table = RateTable::default();
        for code in table.list_currencies() {
            let result = convert(&table, "100", code, code).unwrap();
            assert_eq!(result.converted, 100.0, "identity failed for {code}");
        }
        // 0.1 / 0.91 * 0.91 would drift; identity must not.
        let result = convert(&table, "0.1", "EUR", "EUR").unwrap();
        assert_eq!(result.converted, 0.1);
    }

    #[test]
    fn test_conversion_goes_through_base() {
        let table = RateTable::default();
        let result = convert(&table, "250", "EUR", "JPY").unwrap();
        let expected = (250.0 / 0.91) * 140.0;
        assert_eq!(result.converted, expected);
    }

    #[test]
    fn test_round_trip_within_tolerance() {
        let table = RateTable::default();
        for from in table.list_currencies() {
            for to in table.list_currencies() {
                let there = convert(&table, "1234.5", from, to).unwrap();
                let back = convert(&table, &there.converted.to_string(), to, from).unwrap();
                assert!(
                    (back.converted - 1234.5).abs() < 1e-6,
                    "{from} -> {to} -> {from} gave {}",
                    back.converted
                );
            }
        }
    }

    #[test]
    fn test_empty_amount() {
        let table = usd_inr();
        assert_eq!(
            convert(&table, "", "USD", "INR"),
            Err(ConversionError::EmptyAmount)
        );
        assert_eq!(
            convert(&table, "   \t", "USD", "INR").unwrap_err().kind(),
            ErrorKind::EmptyAmount
        );
    }

    #[test]
    fn test_invalid_amount() {
        let table = usd_inr();
        assert_eq!(
            convert(&table, "abc", "USD", "INR"),
            Err(ConversionError::InvalidAmount("abc".to_string()))
        );
        for text in ["inf", "-inf", "NaN", "1,000", "12abc"] {
            assert_eq!(
                convert(&table, text, "USD", "INR").unwrap_err().kind(),
                ErrorKind::InvalidAmount,
                "{text} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepted_number_forms() {
        let table = usd_inr();
        assert_eq!(convert(&table, " 2 ", "USD", "INR").unwrap().converted, 166.0);
        assert_eq!(convert(&table, "1e2", "USD", "USD").unwrap().amount, 100.0);
        assert_eq!(convert(&table, "-5", "USD", "USD").unwrap().amount, -5.0);
        assert_eq!(convert(&table, "+5", "USD", "USD").unwrap().amount, 5.0);
    }

    #[test]
    fn test_currency_not_selected() {
        let table = usd_inr();
        assert_eq!(
            convert(&table, "50", "", "INR"),
            Err(ConversionError::CurrencyNotSelected)
        );
        assert_eq!(
            convert(&table, "50", "USD", ""),
            Err(ConversionError::CurrencyNotSelected)
        );
    }

    #[test]
    fn test_unknown_currency() {
        let table = usd_inr();
        assert_eq!(
            convert(&table, "50", "XYZ", "INR"),
            Err(ConversionError::UnknownCurrency("XYZ".to_string()))
        );
        assert_eq!(
            convert(&table, "50", "USD", "ABC"),
            Err(ConversionError::UnknownCurrency("ABC".to_string()))
        );
        // Same unknown code on both sides is still rejected.
        assert_eq!(
            convert(&table, "50", "XYZ", "XYZ").unwrap_err().kind(),
            ErrorKind::UnknownCurrency
        );
    }

    #[test]
    fn test_validation_order() {
        let table = usd_inr();
        assert_eq!(
            convert(&table, "", "", "XYZ").unwrap_err().kind(),
            ErrorKind::EmptyAmount
        );
        assert_eq!(
            convert(&table, "abc", "", "XYZ").unwrap_err().kind(),
            ErrorKind::InvalidAmount
        );
        assert_eq!(
            convert(&table, "1", "", "XYZ").unwrap_err().kind(),
            ErrorKind::CurrencyNotSelected
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ConversionError::EmptyAmount.to_string(), "Empty input");
        assert_eq!(
            ConversionError::CurrencyNotSelected.to_string(),
            "Currency not selected"
        );
        assert_eq!(
            ConversionError::UnknownCurrency("XYZ".into()).to_string(),
            "Unknown currency: XYZ"
        );
    }

    #[test]
    fn test_swap() {
        assert_eq!(swap("USD", "INR"), ("INR", "USD"));
        let (from, to) = swap("USD", "INR");
        assert_eq!(swap(from, to), ("USD", "INR"));
    }
}
