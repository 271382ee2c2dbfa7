//! Pricing and financial aggregation engine
//!
//! The numeric core of a construction/renovation business-management
//! application: pure functions that turn raw line-item and ledger records
//! into priced estimate totals, per-rate VAT breakdowns, project
//! profitability summaries, and period-bucketed report series.
//!
//! The engine performs no I/O and keeps no state: the surrounding
//! application loads the records (see [`loader`] for the file-based
//! wrappers the report binaries use), calls in with plain slices, and
//! renders the returned values. Every monetary figure is rounded to two
//! decimals through a single rounding function so per-line and per-entry
//! rounding reconciles exactly with the stored record fields.

pub mod estimate;
pub mod loader;
pub mod project;
pub mod reporting;
pub mod rounding;

pub use estimate::{compute_totals, selling_price, EstimateTotals, LineItem, TaxGroup, TaxRate};
pub use project::{summarize, summarize_global, FinancialSummary, ProjectLedger};
pub use reporting::{bucket_cash_flow, bucket_time, Period};
pub use rounding::round_currency;
