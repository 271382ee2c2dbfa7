//! Period bucketing for time and cash-flow reports
//!
//! Buckets dated records into day/week/month/year groups for charting.
//! Bucket keys are strings whose lexicographic order is chronological
//! (ISO dates, `YYYY-MM`, `YYYY`), so emitting a `BTreeMap` in key order
//! gives the ascending, sparse output the chart layer expects.

use crate::project::{CostEntry, EntryKind, TimeEntry};
use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Report granularity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    Day,
    Week,
    Month,
    Year,
}

impl Period {
    /// Bucket key for a date at this granularity.
    ///
    /// Weeks are Sunday-aligned regardless of locale: the key is the ISO
    /// date of the Sunday on or before the record's date.
    pub fn bucket_key(&self, date: NaiveDate) -> String {
        match self {
            Period::Day => date.format("%Y-%m-%d").to_string(),
            Period::Week => {
                let days_from_sunday = date.weekday().num_days_from_sunday() as u64;
                let week_start = date - Days::new(days_from_sunday);
                week_start.format("%Y-%m-%d").to_string()
            }
            Period::Month => date.format("%Y-%m").to_string(),
            Period::Year => date.format("%Y").to_string(),
        }
    }
}

/// Minutes worked per period bucket
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBucket {
    /// Bucket key (ISO date, week start, `YYYY-MM`, or `YYYY`)
    pub period: String,
    /// Total minutes recorded in this bucket
    pub minutes: u64,
}

/// Income and expense per period bucket
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowBucket {
    /// Bucket key (ISO date, week start, `YYYY-MM`, or `YYYY`)
    pub period: String,
    /// Total income recorded in this bucket
    pub income: f64,
    /// Total expenses recorded in this bucket
    pub expense: f64,
}

/// Bucket time-tracking sessions by period, ascending, sparse.
pub fn bucket_time(entries: &[TimeEntry], period: Period) -> Vec<TimeBucket> {
    let mut buckets: BTreeMap<String, u64> = BTreeMap::new();
    for entry in entries {
        *buckets.entry(period.bucket_key(entry.date)).or_insert(0) += entry.minutes as u64;
    }
    buckets
        .into_iter()
        .map(|(period, minutes)| TimeBucket { period, minutes })
        .collect()
}

/// Bucket ledger movements by period, ascending, sparse.
///
/// Amounts are summed raw per bucket; the chart layer rounds on display
/// if it needs to (bucket sums of already-rounded stored amounts).
pub fn bucket_cash_flow(entries: &[CostEntry], period: Period) -> Vec<CashFlowBucket> {
    let mut buckets: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for entry in entries {
        let bucket = buckets
            .entry(period.bucket_key(entry.date))
            .or_insert((0.0, 0.0));
        match entry.kind {
            EntryKind::Income => bucket.0 += entry.amount,
            EntryKind::Expense => bucket.1 += entry.amount,
        }
    }
    buckets
        .into_iter()
        .map(|(period, (income, expense))| CashFlowBucket {
            period,
            income,
            expense,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_bucket_keys() {
        let d = date(2024, 3, 15); // a Friday
        assert_eq!(Period::Day.bucket_key(d), "2024-03-15");
        assert_eq!(Period::Week.bucket_key(d), "2024-03-10"); // Sunday before
        assert_eq!(Period::Month.bucket_key(d), "2024-03");
        assert_eq!(Period::Year.bucket_key(d), "2024");
    }

    #[test]
    fn test_sunday_is_its_own_week_start() {
        let sunday = date(2024, 3, 10);
        assert_eq!(Period::Week.bucket_key(sunday), "2024-03-10");
        // Saturday still belongs to the week started six days earlier
        let saturday = date(2024, 3, 16);
        assert_eq!(Period::Week.bucket_key(saturday), "2024-03-10");
    }

    #[test]
    fn test_week_start_crosses_month_boundary() {
        // 2024-05-01 is a Wednesday; its week started Sunday 2024-04-28
        assert_eq!(Period::Week.bucket_key(date(2024, 5, 1)), "2024-04-28");
    }

    #[test]
    fn test_time_buckets_ascending_and_sparse() {
        let entries = [
            TimeEntry {
                date: date(2024, 3, 15),
                minutes: 90,
            },
            TimeEntry {
                date: date(2024, 1, 8),
                minutes: 60,
            },
            TimeEntry {
                date: date(2024, 3, 2),
                minutes: 30,
            },
        ];

        let buckets = bucket_time(&entries, Period::Month);
        // No bucket for the empty February
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period, "2024-01");
        assert_eq!(buckets[0].minutes, 60);
        assert_eq!(buckets[1].period, "2024-03");
        assert_eq!(buckets[1].minutes, 120);
    }

    #[test]
    fn test_cash_flow_buckets_split_by_kind() {
        let entries = [
            CostEntry::expense(500.0, date(2024, 3, 5)),
            CostEntry::income(1200.0, date(2024, 3, 20)),
            CostEntry::expense(250.0, date(2024, 4, 2)),
        ];

        let buckets = bucket_cash_flow(&entries, Period::Month);
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].period, "2024-03");
        assert_eq!(buckets[0].income, 1200.0);
        assert_eq!(buckets[0].expense, 500.0);
        assert_eq!(buckets[1].period, "2024-04");
        assert_eq!(buckets[1].expense, 250.0);
    }

    #[test]
    fn test_empty_input_yields_no_buckets() {
        assert!(bucket_time(&[], Period::Day).is_empty());
        assert!(bucket_cash_flow(&[], Period::Year).is_empty());
    }

    #[test]
    fn test_yearly_keys_sort_chronologically() {
        let entries = [
            CostEntry::income(10.0, date(2025, 1, 1)),
            CostEntry::income(10.0, date(2023, 12, 31)),
            CostEntry::income(10.0, date(2024, 6, 1)),
        ];
        let buckets = bucket_cash_flow(&entries, Period::Year);
        let keys: Vec<&str> = buckets.iter().map(|b| b.period.as_str()).collect();
        assert_eq!(keys, vec!["2023", "2024", "2025"]);
    }
}
