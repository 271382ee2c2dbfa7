//! Project ledger records and financial aggregation

mod entries;
mod summary;

pub use entries::{CostEntry, EntryKind, HourEntry, TimeEntry};
pub use summary::{summarize, summarize_global, FinancialSummary, ProjectLedger};
