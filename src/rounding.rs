//! Canonical currency rounding
//!
//! Every monetary value in the engine is rounded through [`round_currency`].
//! Centralizing the rounding here keeps the per-entry / per-line rounding
//! discipline of the aggregators consistent instead of each module carrying
//! its own decimal rounding.

/// Correction added to the scaled value before rounding.
///
/// Monetary inputs like 10.455 are stored as the nearest binary double
/// (10.45499999...), so `* 100.0` lands just below the true half boundary.
/// The correction pulls those back over the boundary without disturbing
/// values that are genuinely below it (the nearest decimal candidates at
/// monetary scale sit orders of magnitude further away).
const ROUNDING_CORRECTION: f64 = 1e-9;

/// Round to 2 decimal places, half away from zero.
///
/// `round_currency(0.1 + 0.2)` is exactly `0.3`, `round_currency(10.456)`
/// is `10.46`, and negatives round symmetrically:
/// `round_currency(-10.456)` is `-10.46`. Idempotent for all finite
/// inputs. Non-finite values (NaN, infinities) are returned unchanged so
/// they propagate to the caller rather than being masked.
pub fn round_currency(value: f64) -> f64 {
    if !value.is_finite() {
        return value;
    }
    let cents = (value.abs() * 100.0 + ROUNDING_CORRECTION).round();
    value.signum() * cents / 100.0
}
