//! Tax grouping and estimate totals
//!
//! Groups priced line items by VAT rate and produces the per-rate taxable
//! bases, tax due, and grand total for an estimate or invoice. Totals are
//! derived fresh on every call; nothing here is persisted.

use super::LineItem;
use crate::rounding::round_currency;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Aggregate of all line items sharing one VAT rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TaxGroup {
    /// VAT rate in percent
    pub tax_rate_percent: f64,
    /// Rounded sum of the line subtotals at this rate
    pub taxable_base: f64,
    /// Tax due on the base at this rate
    pub tax_due: f64,
}

/// Priced totals for one estimate or invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateTotals {
    /// Rounded sum of all line subtotals, before tax
    pub subtotal: f64,
    /// One group per distinct VAT rate, highest rate first
    pub tax_groups: Vec<TaxGroup>,
    /// Rounded sum of tax due across groups
    pub total_tax: f64,
    /// Subtotal plus total tax
    pub grand_total: f64,
}

impl EstimateTotals {
    /// Totals of an empty estimate
    pub fn empty() -> Self {
        Self {
            subtotal: 0.0,
            tax_groups: Vec::new(),
            total_tax: 0.0,
            grand_total: 0.0,
        }
    }
}

/// Compute the priced totals and per-rate tax breakdown for an estimate.
///
/// Each line subtotal is rounded individually, the rates are resolved at
/// this boundary (missing rates become the standard VAT rate), and the
/// groups come back sorted by rate descending so the rendered breakdown
/// table is stable across calls. Never panics; non-finite inputs
/// propagate into the corresponding outputs.
pub fn compute_totals(items: &[LineItem]) -> EstimateTotals {
    if items.is_empty() {
        return EstimateTotals::empty();
    }

    let line_subtotals: Vec<f64> = items.iter().map(LineItem::line_subtotal).collect();
    let subtotal = round_currency(line_subtotals.iter().sum());

    // Group by resolved rate. The rate set is tiny (a handful of VAT
    // rates), so a linear scan over the groups beats hashing f64 keys.
    // NaN rates never compare equal and so land in their own groups.
    let mut groups: Vec<(f64, f64)> = Vec::new();
    for (item, &line_subtotal) in items.iter().zip(&line_subtotals) {
        let rate = item.tax_rate.resolve();
        match groups.iter_mut().find(|(r, _)| *r == rate) {
            Some((_, base)) => *base += line_subtotal,
            None => groups.push((rate, line_subtotal)),
        }
    }

    // Highest rate first; stable presentation order for golden outputs
    groups.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

    let tax_groups: Vec<TaxGroup> = groups
        .into_iter()
        .map(|(rate, base)| {
            let taxable_base = round_currency(base);
            TaxGroup {
                tax_rate_percent: rate,
                taxable_base,
                tax_due: round_currency(taxable_base * rate / 100.0),
            }
        })
        .collect();

    let total_tax = round_currency(tax_groups.iter().map(|g| g.tax_due).sum());
    let grand_total = round_currency(subtotal + total_tax);

    EstimateTotals {
        subtotal,
        tax_groups,
        total_tax,
        grand_total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_estimate() {
        let totals = compute_totals(&[]);
        assert_eq!(totals, EstimateTotals::empty());
        assert!(totals.tax_groups.is_empty());
    }

    #[test]
    fn test_single_rate_yields_one_group() {
        let items = [
            LineItem::priced(2.0, 10.0).with_tax_rate(10.0),
            LineItem::priced(1.0, 30.0).with_tax_rate(10.0),
        ];
        let totals = compute_totals(&items);

        assert_eq!(totals.subtotal, 50.0);
        assert_eq!(totals.tax_groups.len(), 1);
        assert_eq!(totals.tax_groups[0].taxable_base, totals.subtotal);
        assert_eq!(totals.tax_groups[0].tax_due, 5.0);
        assert_eq!(totals.grand_total, 55.0);
    }

    #[test]
    fn test_missing_rate_defaults_to_standard() {
        let items = [LineItem::priced(1.0, 100.0)];
        let totals = compute_totals(&items);

        assert_eq!(totals.tax_groups.len(), 1);
        assert_eq!(totals.tax_groups[0].tax_rate_percent, 21.0);
        assert_eq!(totals.tax_groups[0].tax_due, 21.0);
        assert_eq!(totals.grand_total, 121.0);
    }

    #[test]
    fn test_groups_sorted_rate_descending() {
        let items = [
            LineItem::priced(1.0, 10.0).with_tax_rate(4.0),
            LineItem::priced(1.0, 10.0).with_tax_rate(21.0),
            LineItem::priced(1.0, 10.0).with_tax_rate(0.0),
            LineItem::priced(1.0, 10.0).with_tax_rate(10.0),
        ];
        let totals = compute_totals(&items);

        let rates: Vec<f64> = totals
            .tax_groups
            .iter()
            .map(|g| g.tax_rate_percent)
            .collect();
        assert_eq!(rates, vec![21.0, 10.0, 4.0, 0.0]);
    }

    #[test]
    fn test_grouping_partitions_subtotal() {
        let items = [
            LineItem::cost_margin(3.0, 12.5, 10.0).with_tax_rate(21.0),
            LineItem::priced(2.0, 19.99).with_tax_rate(10.0),
            LineItem::priced(1.5, 8.4).with_tax_rate(21.0),
            LineItem::priced(4.0, 3.05).with_tax_rate(4.0),
        ];
        let totals = compute_totals(&items);

        let base_sum: f64 = totals.tax_groups.iter().map(|g| g.taxable_base).sum();
        assert_eq!(round_currency(base_sum), totals.subtotal);
        assert_eq!(
            totals.grand_total,
            round_currency(totals.subtotal + totals.total_tax)
        );
    }

    #[test]
    fn test_zero_rate_group_present_with_zero_tax() {
        let items = [LineItem::priced(1.0, 250.0).with_tax_rate(0.0)];
        let totals = compute_totals(&items);

        assert_eq!(totals.tax_groups.len(), 1);
        assert_eq!(totals.tax_groups[0].tax_due, 0.0);
        assert_eq!(totals.grand_total, 250.0);
    }

    #[test]
    fn test_nan_input_propagates() {
        let items = [LineItem::priced(f64::NAN, 10.0).with_tax_rate(21.0)];
        let totals = compute_totals(&items);

        assert!(totals.subtotal.is_nan());
        assert!(totals.grand_total.is_nan());
    }

    /// Three items, 20% margin flat, mixed 21/10 rates. Reference figures
    /// from the production estimate the engine must reproduce exactly.
    #[test]
    fn test_three_item_estimate_golden() {
        let items = [
            LineItem::cost_margin(1.0, 100.0, 20.0).with_tax_rate(21.0),
            LineItem::cost_margin(5.0, 20.0, 20.0).with_tax_rate(21.0),
            LineItem::cost_margin(2.0, 50.0, 20.0).with_tax_rate(10.0),
        ];

        assert_eq!(items[0].pricing.unit_price(), 120.0);
        assert_eq!(items[1].pricing.unit_price(), 24.0);
        assert_eq!(items[2].pricing.unit_price(), 60.0);
        for item in &items {
            assert_eq!(item.line_subtotal(), 120.0);
        }

        let totals = compute_totals(&items);
        assert_eq!(totals.subtotal, 360.0);

        assert_eq!(totals.tax_groups.len(), 2);
        let g21 = &totals.tax_groups[0];
        assert_eq!(g21.tax_rate_percent, 21.0);
        assert_eq!(g21.taxable_base, 240.0);
        assert_eq!(g21.tax_due, 50.40);

        let g10 = &totals.tax_groups[1];
        assert_eq!(g10.tax_rate_percent, 10.0);
        assert_eq!(g10.taxable_base, 120.0);
        assert_eq!(g10.tax_due, 12.00);

        assert_eq!(totals.total_tax, 62.40);
        assert_eq!(totals.grand_total, 422.40);
    }
}
