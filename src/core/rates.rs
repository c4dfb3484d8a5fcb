//! Fixed exchange rates

use crate::core::convert::ConversionError;
use anyhow::{Result, bail};

/// Code of the currency every factor is expressed against.
pub const BASE_CURRENCY: &str = "USD";

/// Built-in rates: units of each currency per one USD, in display order.
pub const STATIC_RATES: &[(&str, f64)] = &[
    ("USD", 1.0),
    ("INR", 83.0),
    ("EUR", 0.91),
    ("GBP", 0.78),
    ("JPY", 140.0),
];

/// Immutable mapping of currency code to conversion factor.
///
/// Entries keep their declaration order so selectors and listings are stable.
#[derive(Debug, Clone, PartialEq)]
pub struct RateTable {
    entries: Vec<(String, f64)>,
}

impl RateTable {
    /// Builds a table from `(code, factor)` pairs.
    ///
    /// Fails if the table is empty, a code is blank or repeated, or a factor
    /// is not a positive finite number.
    pub fn new<I, S>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        let mut table: Vec<(String, f64)> = Vec::new();
        for (code, factor) in entries {
            let code = code.into();
            if code.trim().is_empty() {
                bail!("Currency code cannot be empty");
            }
            if !factor.is_finite() || factor <= 0.0 {
                bail!("Rate for {code} must be a positive number, got {factor}");
            }
            if table.iter().any(|(c, _)| *c == code) {
                bail!("Duplicate currency code: {code}");
            }
            table.push((code, factor));
        }

        if table.is_empty() {
            bail!("Rate table must contain at least one currency");
        }
        Ok(Self { entries: table })
    }

    /// Supported codes in declaration order.
    pub fn list_currencies(&self) -> Vec<&str> {
        self.entries.iter().map(|(code, _)| code.as_str()).collect()
    }

    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    pub fn contains(&self, code: &str) -> bool {
        self.entries.iter().any(|(c, _)| c == code)
    }

    pub fn rate_of(&self, code: &str) -> Result<f64, ConversionError> {
        self.entries
            .iter()
            .find(|(c, _)| c == code)
            .map(|(_, factor)| *factor)
            .ok_or_else(|| ConversionError::UnknownCurrency(code.to_string()))
    }

    /// Initial and post-reset `(from, to)` pair: the first two declared codes.
    pub fn default_selections(&self) -> (String, String) {
        let from = &self.entries[0].0;
        let to = self.entries.get(1).map_or(from, |(code, _)| code);
        (from.clone(), to.clone())
    }
}

impl Default for RateTable {
    fn default() -> Self {
        Self {
            entries: STATIC_RATES
                .iter()
                .map(|(code, factor)| (code.to_string(), *factor))
                .collect(),
        }
    }
}
