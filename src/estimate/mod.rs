//! Estimate pricing: line items, selling prices, and tax-grouped totals

mod line_item;
mod totals;

pub use line_item::{selling_price, LineItem, TaxRate, UnitPricing};
pub use totals::{compute_totals, EstimateTotals, TaxGroup};

// ============================================================================
// Standard VAT Rate
// ============================================================================
// Line items normally carry one of the domain's VAT rates (0%, 4%, 10%, 21%).
// Items saved without an explicit rate fall back to the standard rate.

/// Standard VAT rate (21%) applied when a line item carries no explicit rate
pub const STANDARD_VAT_RATE: f64 = 21.0;
