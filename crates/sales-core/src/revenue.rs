//! # Revenue Calculation
//!
//! How much money a single receipt line actually brought in.
//!
//! ```text
//! sale_price × quantity × (1 − discount / 100)
//!
//!   20.00    ×    10    × (1 − 10 / 100)      = 180.00
//! ```
//!
//! No rounding is applied here; see [`crate::money`].

use crate::types::{Item, Product};

/// A revenue policy: maps a receipt line to the amount collected for it.
///
/// The product is passed alongside the item so alternative policies (e.g.
/// revenue net of a per-category fee) can use catalog data. Any closure with
/// the matching signature is a policy:
///
/// ```rust
/// use sales_core::revenue::RevenueCalculator;
/// use sales_core::types::{Item, Product};
///
/// let gross = |item: &Item, _product: &Product| item.sale_price * f64::from(item.quantity);
/// let item = Item::new("SKU_001", 2.5, 4, 50.0);
/// assert_eq!(gross.revenue(&item, &Product::new("SKU_001", 1.0)), 10.0);
/// ```
pub trait RevenueCalculator: Send + Sync {
    fn revenue(&self, item: &Item, product: &Product) -> f64;
}

impl<F> RevenueCalculator for F
where
    F: Fn(&Item, &Product) -> f64 + Send + Sync,
{
    fn revenue(&self, item: &Item, product: &Product) -> f64 {
        self(item, product)
    }
}

/// Discounted line revenue. The default revenue policy.
///
/// Assumes the item has passed [`validate_item`](crate::validation::validate_item);
/// a discount outside 0..=100 produces a meaningless result.
///
/// ## Example
/// ```rust
/// use sales_core::revenue::calculate_simple_revenue;
/// use sales_core::types::{Item, Product};
///
/// let item = Item::new("P1", 20.0, 10, 10.0);
/// let revenue = calculate_simple_revenue(&item, &Product::new("P1", 10.0));
/// assert!((revenue - 180.0).abs() < 1e-9);
/// ```
pub fn calculate_simple_revenue(item: &Item, _product: &Product) -> f64 {
    let discount = item.discount / 100.0;
    item.sale_price * f64::from(item.quantity) * (1.0 - discount)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product() -> Product {
        Product::new("P1", 1.0)
    }

    #[test]
    fn test_no_discount_is_price_times_quantity() {
        for (price, qty) in [(0.0, 1), (8.5, 2), (19.99, 7), (1234.56, 3)] {
            let item = Item::new("P1", price, qty, 0.0);
            assert_eq!(calculate_simple_revenue(&item, &product()), price * f64::from(qty));
        }
    }

    #[test]
    fn test_full_discount_is_free() {
        let item = Item::new("P1", 49.99, 5, 100.0);
        assert_eq!(calculate_simple_revenue(&item, &product()), 0.0);
    }

    #[test]
    fn test_revenue_never_grows_with_discount() {
        let mut previous = f64::INFINITY;
        for step in 0..=20 {
            let item = Item::new("P1", 13.7, 3, f64::from(step) * 5.0);
            let revenue = calculate_simple_revenue(&item, &product());
            assert!(revenue <= previous, "discount {} raised revenue", step * 5);
            previous = revenue;
        }
    }

    #[test]
    fn test_unrounded() {
        // 3 × 3.33 × 0.85 = 8.4915, kept as-is until the report is projected
        let item = Item::new("P1", 3.33, 3, 15.0);
        let revenue = calculate_simple_revenue(&item, &product());
        assert!((revenue - 8.4915).abs() < 1e-9);
    }

    #[test]
    fn test_fn_item_is_a_policy() {
        let policy: &dyn RevenueCalculator = &calculate_simple_revenue;
        let item = Item::new("P1", 20.0, 10, 10.0);
        assert!((policy.revenue(&item, &product()) - 180.0).abs() < 1e-9);
    }
}
