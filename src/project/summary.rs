//! Project profitability aggregation
//!
//! Combines a project's budget, cost entries, and labor records into the
//! budgeted / spent / collected / profit summary rendered on the project
//! dashboard. Pure: operates only on the records it is handed and
//! allocates a fresh summary per call.

use super::{CostEntry, EntryKind, HourEntry};
use crate::rounding::round_currency;
use serde::{Deserialize, Serialize};

/// Profitability summary for one project, or globally across projects
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FinancialSummary {
    /// Stored budget, 0 when no budget was set
    pub budgeted: f64,
    /// Material/other expenses plus labor cost
    pub spent: f64,
    /// Income received
    pub collected: f64,
    /// Labor component of `spent`
    pub labor_cost: f64,
    /// Collected minus spent
    pub profit: f64,
}

impl FinancialSummary {
    /// Profit as a percentage of collected income, for dashboard cards.
    /// Zero collected yields zero rather than a division blowup.
    pub fn margin_percent(&self) -> f64 {
        if self.collected == 0.0 {
            return 0.0;
        }
        round_currency(self.profit / self.collected * 100.0)
    }
}

/// One project's budget and full ledger, as loaded for aggregation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectLedger {
    /// Stored budget; None when the project has no budget set
    pub budget: Option<f64>,
    #[serde(default)]
    pub cost_entries: Vec<CostEntry>,
    #[serde(default)]
    pub hour_entries: Vec<HourEntry>,
}

/// Aggregate one project's records into a [`FinancialSummary`].
///
/// Labor cost sums the *per-entry rounded* costs and rounds the sum
/// again; each hour entry is stored with its own pre-computed cost
/// field, so the summary must match what those stored fields add up to.
/// A project with no entries yields an all-zero summary apart from
/// `budgeted`.
pub fn summarize(
    budget: Option<f64>,
    cost_entries: &[CostEntry],
    hour_entries: &[HourEntry],
) -> FinancialSummary {
    let budgeted = round_currency(budget.unwrap_or(0.0));

    let material_spend = round_currency(
        cost_entries
            .iter()
            .filter(|e| e.kind == EntryKind::Expense)
            .map(|e| e.amount)
            .sum(),
    );

    let labor_cost = round_currency(hour_entries.iter().map(HourEntry::labor_cost).sum());

    let spent = round_currency(material_spend + labor_cost);

    let collected = round_currency(
        cost_entries
            .iter()
            .filter(|e| e.kind == EntryKind::Income)
            .map(|e| e.amount)
            .sum(),
    );

    FinancialSummary {
        budgeted,
        spent,
        collected,
        labor_cost,
        profit: round_currency(collected - spent),
    }
}

/// Aggregate across all of a user's projects.
///
/// Budgets are summed first, then the same steps as [`summarize`] run
/// over the concatenated entry sets; same algorithm, wider scope.
pub fn summarize_global(projects: &[ProjectLedger]) -> FinancialSummary {
    let total_budget: f64 = projects.iter().filter_map(|p| p.budget).sum();
    let budget = if projects.iter().any(|p| p.budget.is_some()) {
        Some(total_budget)
    } else {
        None
    };

    let cost_entries: Vec<CostEntry> = projects
        .iter()
        .flat_map(|p| p.cost_entries.iter().copied())
        .collect();
    let hour_entries: Vec<HourEntry> = projects
        .iter()
        .flat_map(|p| p.hour_entries.iter().copied())
        .collect();

    summarize(budget, &cost_entries, &hour_entries)
}
