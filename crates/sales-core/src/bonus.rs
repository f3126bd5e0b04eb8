//! # Bonus Calculation
//!
//! Rank-based bonus tiers. Rank is the zero-based position of a seller after
//! sorting all sellers by profit, highest first.
//!
//! ```text
//! ┌──────────────────────────────┬────────────────┐
//! │ rank                         │ bonus          │
//! ├──────────────────────────────┼────────────────┤
//! │ 0 (top performer)            │ profit × 0.15  │
//! │ 1 or 2                       │ profit × 0.10  │
//! │ last (total − 1), not rank 0 │ 0              │
//! │ everyone else                │ profit × 0.05  │
//! └──────────────────────────────┴────────────────┘
//! ```
//!
//! The rows are checked top to bottom. With a single seller, rank 0 is also
//! the last rank and the top-performer row wins.

use crate::types::SellerStat;

/// Bonus share for rank 0.
pub const TOP_RATE: f64 = 0.15;

/// Bonus share for ranks 1 and 2.
pub const RUNNER_UP_RATE: f64 = 0.10;

/// Bonus share for everyone between the podium and the last place.
pub const BASE_RATE: f64 = 0.05;

/// A bonus policy: `(rank, total_sellers, seller) -> bonus`.
///
/// Closures with the matching signature are policies.
pub trait BonusCalculator: Send + Sync {
    fn bonus(&self, rank: usize, total_sellers: usize, seller: &SellerStat) -> f64;
}

impl<F> BonusCalculator for F
where
    F: Fn(usize, usize, &SellerStat) -> f64 + Send + Sync,
{
    fn bonus(&self, rank: usize, total_sellers: usize, seller: &SellerStat) -> f64 {
        self(rank, total_sellers, seller)
    }
}

/// Bonus for a seller at `rank` out of `total_sellers` with the given profit.
///
/// ## Example
/// ```rust
/// use sales_core::bonus::bonus_for_rank;
///
/// assert_eq!(bonus_for_rank(0, 1, 80.0), 80.0 * 0.15); // alone: still the top
/// assert_eq!(bonus_for_rank(4, 5, 80.0), 0.0);         // last place
/// ```
pub fn bonus_for_rank(rank: usize, total_sellers: usize, profit: f64) -> f64 {
    if rank == 0 {
        profit * TOP_RATE
    } else if rank == 1 || rank == 2 {
        profit * RUNNER_UP_RATE
    } else if rank + 1 == total_sellers {
        0.0
    } else {
        profit * BASE_RATE
    }
}

/// The default bonus policy: [`bonus_for_rank`] on the seller's profit.
pub fn calculate_bonus_by_profit(rank: usize, total_sellers: usize, seller: &SellerStat) -> f64 {
    bonus_for_rank(rank, total_sellers, seller.profit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Seller;

    #[test]
    fn test_tiers_for_five_sellers() {
        let profit = 1000.0;
        assert_eq!(bonus_for_rank(0, 5, profit), 150.0);
        assert_eq!(bonus_for_rank(1, 5, profit), 100.0);
        assert_eq!(bonus_for_rank(2, 5, profit), 100.0);
        assert_eq!(bonus_for_rank(3, 5, profit), 50.0);
        assert_eq!(bonus_for_rank(4, 5, profit), 0.0);
    }

    #[test]
    fn test_single_seller_gets_top_rate() {
        assert_eq!(bonus_for_rank(0, 1, 80.0), 80.0 * TOP_RATE);
    }

    #[test]
    fn test_podium_beats_last_place() {
        // With 2 or 3 sellers the last rank is also 1 or 2; the podium tier wins.
        assert_eq!(bonus_for_rank(1, 2, 200.0), 20.0);
        assert_eq!(bonus_for_rank(2, 3, 200.0), 20.0);
    }

    #[test]
    fn test_last_place_of_four() {
        assert_eq!(bonus_for_rank(3, 4, 500.0), 0.0);
    }

    #[test]
    fn test_negative_profit_scales_too() {
        assert_eq!(bonus_for_rank(3, 6, -40.0), -2.0);
    }

    #[test]
    fn test_policy_reads_seller_profit() {
        let mut stat = SellerStat::new(&Seller::new("S1", "Ann", "Lee"));
        stat.profit = 300.0;
        let policy: &dyn BonusCalculator = &calculate_bonus_by_profit;
        assert!((policy.bonus(5, 10, &stat) - 15.0).abs() < 1e-9);
    }
}
