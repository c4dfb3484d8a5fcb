//! Interactive conversion state owned by a front end.

use crate::core::convert::{self, Conversion, ConversionError};
use crate::core::rates::RateTable;
use tracing::debug;

pub const STATUS_READY: &str = "Ready to convert!";
pub const STATUS_FAILED: &str = "Conversion failed: Invalid input";
pub const STATUS_SWAPPED: &str = "Currencies swapped.";
pub const STATUS_RESET: &str = "Reset successful.";

/// What the result area currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Idle,
    Converted(Conversion),
    Failed(ConversionError),
}

/// Selections, amount input, displayed result and the history log of one
/// session. The converter is called with plain values taken from here.
#[derive(Debug, Clone)]
pub struct Session {
    table: RateTable,
    amount_text: String,
    from: String,
    to: String,
    outcome: Outcome,
    status: String,
    history: Vec<String>,
}

impl Session {
    pub fn new(table: RateTable) -> Self {
        let (from, to) = table.default_selections();
        Self {
            table,
            amount_text: String::new(),
            from,
            to,
            outcome: Outcome::Idle,
            status: STATUS_READY.to_string(),
            history: Vec::new(),
        }
    }

    pub fn table(&self) -> &RateTable {
        &self.table
    }

    pub fn amount_text(&self) -> &str {
        &self.amount_text
    }

    pub fn from(&self) -> &str {
        &self.from
    }

    pub fn to(&self) -> &str {
        &self.to
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Successful conversions, oldest first.
    pub fn history(&self) -> &[String] {
        &self.history
    }

    pub fn set_amount(&mut self, text: impl Into<String>) {
        self.amount_text = text.into();
    }

    /// An empty code clears the selection.
    pub fn select_from(&mut self, code: impl Into<String>) {
        self.from = code.into();
    }

    pub fn select_to(&mut self, code: impl Into<String>) {
        self.to = code.into();
    }

    /// Runs the converter on the current input. Only successes reach the
    /// history log.
    pub fn convert(&mut self) -> &Outcome {
        let result = convert::convert(&self.table, &self.amount_text, &self.from, &self.to);
        self.outcome = match result {
            Ok(conversion) => {
                let entry = conversion.display();
                debug!(%entry, "Conversion succeeded");
                self.status = format!("Converted from {} to {}", conversion.from, conversion.to);
                self.history.push(entry);
                Outcome::Converted(conversion)
            }
            Err(e) => {
                debug!(error = %e, amount = %self.amount_text, "Conversion rejected");
                self.status = STATUS_FAILED.to_string();
                Outcome::Failed(e)
            }
        };
        &self.outcome
    }

    pub fn swap(&mut self) {
        let from = std::mem::take(&mut self.from);
        let to = std::mem::take(&mut self.to);
        (self.from, self.to) = convert::swap(from, to);
        debug!(from = %self.from, to = %self.to, "Swapped currencies");
        self.status = STATUS_SWAPPED.to_string();
    }

    /// Clears input, result and history and restores the default selections.
    pub fn reset(&mut self) {
        let (from, to) = self.table.default_selections();
        self.amount_text.clear();
        self.from = from;
        self.to = to;
        self.outcome = Outcome::Idle;
        self.history.clear();
        self.status = STATUS_RESET.to_string();
        debug!("Session reset");
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new(RateTable::default())
    }
}
