//! Ledger record types attached to a project
//!
//! These are plain data records handed to the engine already loaded;
//! persistence and validation live outside.

use crate::rounding::round_currency;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Direction of a ledger movement
///
/// Amounts are stored positive; the direction is carried here rather
/// than in the sign of the amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    /// Money out: materials, subcontracting, fees
    Expense,
    /// Money in: client payments, refunds received
    Income,
}

/// A dated ledger movement attached to a project
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostEntry {
    /// Movement amount, always positive
    pub amount: f64,
    /// Expense or income
    pub kind: EntryKind,
    /// Movement date
    pub date: NaiveDate,
}

impl CostEntry {
    pub fn expense(amount: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: EntryKind::Expense,
            date,
        }
    }

    pub fn income(amount: f64, date: NaiveDate) -> Self {
        Self {
            amount,
            kind: EntryKind::Income,
            date,
        }
    }
}

/// A dated labor record: hours worked at an hourly rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourEntry {
    /// Work date
    pub date: NaiveDate,
    /// Hours worked
    pub hours: f64,
    /// Hourly rate charged for this entry
    pub hourly_rate: f64,
}

impl HourEntry {
    pub fn new(date: NaiveDate, hours: f64, hourly_rate: f64) -> Self {
        Self {
            date,
            hours,
            hourly_rate,
        }
    }

    /// Rounded cost of this entry: hours x hourly rate.
    ///
    /// Each entry's cost is rounded on its own because entries are stored
    /// with a pre-computed cost field; aggregation sums these rounded
    /// per-entry costs, not the raw products.
    pub fn labor_cost(&self) -> f64 {
        round_currency(self.hours * self.hourly_rate)
    }
}

/// A raw time-tracking session: minutes worked on a date
///
/// Consumed by the period reports; labor costing goes through
/// [`HourEntry`] instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Session date
    pub date: NaiveDate,
    /// Minutes worked
    pub minutes: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_labor_cost_rounds_per_entry() {
        let entry = HourEntry::new(date(2024, 3, 15), 10.0, 25.0);
        assert_eq!(entry.labor_cost(), 250.0);

        // Fractional rate: 1.5h at 33.33/h = 49.995, rounds to 50.00
        let entry = HourEntry::new(date(2024, 3, 15), 1.5, 33.33);
        assert_eq!(entry.labor_cost(), 50.0);
    }

    #[test]
    fn test_cost_entry_kind_serde() {
        let entry = CostEntry::expense(120.5, date(2024, 1, 2));
        let json = serde_json::to_string(&entry).expect("Failed to serialize");
        assert!(json.contains(r#""kind":"expense""#));

        let back: CostEntry = serde_json::from_str(&json).expect("Failed to parse");
        assert_eq!(back, entry);
    }
}
