//! # Money Module
//!
//! Rounding rules for monetary values in the report.
//!
//! ## When Rounding Happens
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  line revenue ──┐                                                       │
//! │  line cost    ──┼──► seller accumulators (full precision)               │
//! │  receipt total──┘            │                                          │
//! │                              ▼                                          │
//! │                    report projection ──► round_money() ──► 2 places     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Accumulators keep full `f64` precision for the whole run. Rounding each
//! line item first would let per-line rounding error pile up across
//! thousands of receipts, so only the projected revenue, profit and bonus are
//! rounded.
//!
//! ## Usage
//! ```rust
//! use sales_core::money::round_money;
//!
//! assert_eq!(round_money(179.999), 180.0);
//! assert_eq!(round_money(12.344), 12.34);
//! ```

/// Number of decimal places kept in report amounts.
pub const DECIMAL_PLACES: i32 = 2;

/// Scaled amounts at or above this have no fractional part left to round.
const EXACT_INTEGER_LIMIT: f64 = 4_503_599_627_370_496.0; // 2^52

/// Rounds a monetary amount to [`DECIMAL_PLACES`] places.
///
/// The decision is made on the exact binary value of `value`, not on
/// `value * 100` after that product has itself been rounded. `0.015` is
/// stored as 0.01499999..., so it rounds down to `0.01`. Only amounts that
/// sit exactly on a half cent (`0.125`, `12.125`) round away from zero. This
/// matches `Number.prototype.toFixed(2)` in the JavaScript reports this
/// output is compared with.
///
/// Negative zero collapses to `0.0` so a seller whose profit rounds away
/// entirely serializes as `0`, not `-0`.
///
/// ## Example
/// ```rust
/// use sales_core::money::round_money;
///
/// assert_eq!(round_money(-0.001), 0.0);
/// assert!(round_money(-0.001).is_sign_positive());
/// assert_eq!(round_money(-3.456), -3.46);
/// assert_eq!(round_money(1.005), 1.0); // 1.00499999...
/// ```
pub fn round_money(value: f64) -> f64 {
    let scale = 10f64.powi(DECIMAL_PLACES);
    let magnitude = value.abs();
    let scaled = magnitude * scale;
    if !scaled.is_finite() || scaled >= EXACT_INTEGER_LIMIT {
        return value;
    }

    // magnitude * scale == scaled + residual, exactly
    let residual = magnitude.mul_add(scale, -scaled);
    let whole = scaled.floor();
    // Sign of (exact fraction - 0.5); the sum keeps the sign of its exact value.
    let past_half = (scaled - whole - 0.5) + residual;
    let cents = if past_half >= 0.0 { whole + 1.0 } else { whole };

    (cents / scale).copysign(value) + 0.0
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounds_to_two_places() {
        assert_eq!(round_money(180.0), 180.0);
        assert_eq!(round_money(80.004), 80.0);
        assert_eq!(round_money(80.006), 80.01);
        assert_eq!(round_money(12.125), 12.13);
    }

    #[test]
    fn test_negative_amounts() {
        assert_eq!(round_money(-15.556), -15.56);
        assert_eq!(round_money(-0.004), 0.0);
        assert!(round_money(-0.004).is_sign_positive());
    }

    #[test]
    fn test_rounds_stored_value_not_scaled_product() {
        // 0.015 * 100 rounds to exactly 1.5, but 0.015 itself is below a half cent
        assert_eq!(round_money(0.015), 0.01);
        assert_eq!(round_money(1.005), 1.0);
        assert_eq!(round_money(-0.015), -0.01);
    }

    #[test]
    fn test_exact_half_cents_round_away_from_zero() {
        assert_eq!(round_money(0.125), 0.13);
        assert_eq!(round_money(-0.125), -0.13);
        assert_eq!(round_money(2.375), 2.38);
    }

    #[test]
    fn test_float_noise_is_removed() {
        // 0.1 + 0.2 = 0.30000000000000004
        assert_eq!(round_money(0.1 + 0.2), 0.3);
    }
}
