use std::fmt;

use jiff::ToSpan;
use jiff::civil::Date;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A relative time span measured back from the latest date in a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "unit", content = "length", rename_all = "snake_case")]
#[ts(export)]
pub enum Lookback {
    Months(u32),
    Days(u32),
}

impl Lookback {
    /// Earliest date still inside the window ending at `reference`.
    pub fn cutoff(self, reference: Date) -> Date {
        // Clamped to a century; jiff spans reject larger unit counts.
        match self {
            Lookback::Months(n) => reference.saturating_sub(i64::from(n.min(1_200)).months()),
            Lookback::Days(n) => reference.saturating_sub(i64::from(n.min(36_500)).days()),
        }
    }
}

impl fmt::Display for Lookback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match *self {
            Lookback::Months(n) => (n, "month"),
            Lookback::Days(n) => (n, "day"),
        };
        let plural = if n == 1 { "" } else { "s" };
        write!(f, "{n} {unit}{plural}")
    }
}
