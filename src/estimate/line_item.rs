//! Line items and unit-price derivation
//!
//! A line item is one priced row of an estimate or invoice. Its unit price
//! is either supplied pre-computed or derived from a unit cost plus a
//! margin percentage.

use super::STANDARD_VAT_RATE;
use crate::rounding::round_currency;
use serde::{Deserialize, Serialize};

/// Derive a unit selling price from a unit cost and a margin percentage.
///
/// `selling_price(100.0, 20.0)` is `120.0`; a zero margin returns the
/// (rounded) cost unchanged. No bounds are enforced here: negative costs
/// or margins pass through arithmetically, since input validation lives
/// in the form layer that feeds the engine.
pub fn selling_price(cost: f64, margin_percent: f64) -> f64 {
    round_currency(cost * (1.0 + margin_percent / 100.0))
}

/// How a line item's unit price is determined
///
/// Estimate rows are entered either with a price the user already knows
/// or with a supplier cost that gets marked up by the company margin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UnitPricing {
    /// Unit price supplied directly
    Priced { unit_price: f64 },
    /// Unit price derived from cost and margin via [`selling_price`]
    CostMargin { unit_cost: f64, margin_percent: f64 },
}

impl UnitPricing {
    /// Resolve to a concrete unit price
    pub fn unit_price(&self) -> f64 {
        match *self {
            UnitPricing::Priced { unit_price } => unit_price,
            UnitPricing::CostMargin {
                unit_cost,
                margin_percent,
            } => selling_price(unit_cost, margin_percent),
        }
    }
}

/// VAT rate attached to a line item
///
/// Persisted rows may carry no rate at all; that is an explicit variant
/// here rather than a bare `Option` so the fallback to the standard rate
/// happens in exactly one place ([`TaxRate::resolve`]).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Option<f64>", into = "Option<f64>")]
pub enum TaxRate {
    /// Explicit rate in percent (0, 4, 10, 21 in practice)
    Known(f64),
    /// No stored rate; resolves to [`STANDARD_VAT_RATE`]
    #[default]
    Standard,
}

impl TaxRate {
    /// Resolve to a concrete percentage
    pub fn resolve(&self) -> f64 {
        match *self {
            TaxRate::Known(percent) => percent,
            TaxRate::Standard => STANDARD_VAT_RATE,
        }
    }
}

impl From<Option<f64>> for TaxRate {
    fn from(rate: Option<f64>) -> Self {
        match rate {
            Some(percent) => TaxRate::Known(percent),
            None => TaxRate::Standard,
        }
    }
}

impl From<TaxRate> for Option<f64> {
    fn from(rate: TaxRate) -> Self {
        match rate {
            TaxRate::Known(percent) => Some(percent),
            TaxRate::Standard => None,
        }
    }
}

/// A single priced row of an estimate or invoice
///
/// Immutable once handed to the engine; totals are recomputed fresh from
/// the full item list on every call rather than cached on the item.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    /// Quantity (units, hours, square meters, ...)
    pub quantity: f64,

    /// Unit price source
    #[serde(flatten)]
    pub pricing: UnitPricing,

    /// VAT rate; missing/null in the stored record means the standard rate
    #[serde(default)]
    pub tax_rate: TaxRate,
}

impl LineItem {
    /// Line item with a pre-computed unit price
    pub fn priced(quantity: f64, unit_price: f64) -> Self {
        Self {
            quantity,
            pricing: UnitPricing::Priced { unit_price },
            tax_rate: TaxRate::Standard,
        }
    }

    /// Line item priced from unit cost and margin percentage
    pub fn cost_margin(quantity: f64, unit_cost: f64, margin_percent: f64) -> Self {
        Self {
            quantity,
            pricing: UnitPricing::CostMargin {
                unit_cost,
                margin_percent,
            },
            tax_rate: TaxRate::Standard,
        }
    }

    /// Set an explicit VAT rate
    pub fn with_tax_rate(mut self, percent: f64) -> Self {
        self.tax_rate = TaxRate::Known(percent);
        self
    }

    /// Rounded subtotal for this line: quantity x unit price
    pub fn line_subtotal(&self) -> f64 {
        round_currency(self.quantity * self.pricing.unit_price())
    }
}
