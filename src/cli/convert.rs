use super::ui;
use crate::core::{RateTable, convert};
use anyhow::Result;
use tracing::debug;

/// Currency codes are matched upper case; blank input stays blank.
pub fn normalize_code(code: &str) -> String {
    code.trim().to_uppercase()
}

/// Converts once and returns the display line.
///
/// Missing currencies fall back to the table's default selections.
pub fn convert_once(
    table: &RateTable,
    amount: &str,
    from: Option<&str>,
    to: Option<&str>,
) -> Result<String> {
    let (default_from, default_to) = table.default_selections();
    let from = from.map_or(default_from, normalize_code);
    let to = to.map_or(default_to, normalize_code);
    debug!(%amount, %from, %to, "Converting");

    let conversion = convert(table, amount, &from, &to)?;
    Ok(conversion.display())
}

pub fn run(table: &RateTable, amount: &str, from: Option<&str>, to: Option<&str>) -> Result<()> {
    let line = convert_once(table, amount, from, to)?;
    println!("{}", ui::style_text(&line, ui::StyleType::Result));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConversionError, ErrorKind};

    #[test]
    fn test_convert_once_uses_defaults() -> Result<()> {
        let table = RateTable::default();
        assert_eq!(
            convert_once(&table, "100", None, None)?,
            "100.00 USD = 8300.00 INR"
        );
        assert_eq!(
            convert_once(&table, "10", Some("gbp"), None)?,
            "10.00 GBP = 1064.10 INR"
        );
        assert_eq!(
            convert_once(&table, "1", Some("eur"), Some(" jpy "))?,
            "1.00 EUR = 153.85 JPY"
        );
        Ok(())
    }

    #[test]
    fn test_convert_once_surfaces_validation_errors() {
        let table = RateTable::default();
        let err = convert_once(&table, "abc", None, None).unwrap_err();
        let err = err.downcast::<ConversionError>().unwrap();
        assert_eq!(err.kind(), ErrorKind::InvalidAmount);

        let err = convert_once(&table, "1", Some(""), None).unwrap_err();
        assert_eq!(err.to_string(), "Currency not selected");

        let err = convert_once(&table, "1", Some("chf"), None).unwrap_err();
        assert_eq!(err.to_string(), "Unknown currency: CHF");
    }
}
