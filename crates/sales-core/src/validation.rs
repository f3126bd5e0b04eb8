//! # Validation Module
//!
//! Input checks run by the analyzer before any number is accumulated.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Loader (caller)                                              │
//! │  └── Type validation (deserialization into SalesData)                  │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                  │
//! │  ├── identifiers present and unique                                    │
//! │  ├── prices finite and non-negative                                    │
//! │  ├── quantity >= 1                                                     │
//! │  └── discount in 0..=100                                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Calculators                                                  │
//! │  └── assume every range above holds                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use sales_core::validation::{validate_discount, validate_quantity};
//!
//! assert!(validate_discount(10.0).is_ok());
//! assert!(validate_quantity(0).is_err());
//! ```

use crate::error::ValidationError;
use crate::types::{Item, Product};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Highest discount percentage (item given away).
pub const MAX_DISCOUNT: f64 = 100.0;

// =============================================================================
// Identifier Validators
// =============================================================================

/// Validates a seller id or SKU: must contain something besides whitespace.
///
/// ## Example
/// ```rust
/// use sales_core::validation::validate_identifier;
///
/// assert!(validate_identifier("sku", "SKU_001").is_ok());
/// assert!(validate_identifier("sku", "  ").is_err());
/// ```
pub fn validate_identifier(field: &str, value: &str) -> ValidationResult<()> {
    if value.trim().is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a monetary amount: finite, zero allowed, never negative.
///
/// ## Example
/// ```rust
/// use sales_core::validation::validate_price;
///
/// assert!(validate_price("sale_price", 0.0).is_ok());   // Free item
/// assert!(validate_price("sale_price", 8.5).is_ok());
/// assert!(validate_price("sale_price", -1.0).is_err());
/// assert!(validate_price("sale_price", f64::NAN).is_err());
/// ```
pub fn validate_price(field: &str, value: f64) -> ValidationResult<()> {
    validate_finite(field, value)?;

    if value < 0.0 {
        return Err(ValidationError::Negative {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a number that may be negative but must be finite.
///
/// Receipt totals fall here: refunds are recorded as negative totals.
pub fn validate_finite(field: &str, value: f64) -> ValidationResult<()> {
    if !value.is_finite() {
        return Err(ValidationError::NotFinite {
            field: field.to_string(),
        });
    }

    Ok(())
}

/// Validates a sold quantity: must be at least one unit.
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    Ok(())
}

/// Validates a discount percentage.
///
/// ## Rules
/// - 0 means no discount
/// - 100 means the item was given away
/// - Anything outside 0..=100 would make revenue negative or inflated
pub fn validate_discount(discount: f64) -> ValidationResult<()> {
    validate_finite("discount", discount)?;

    if !(0.0..=MAX_DISCOUNT).contains(&discount) {
        return Err(ValidationError::OutOfRange {
            field: "discount".to_string(),
            min: 0,
            max: MAX_DISCOUNT as i64,
        });
    }

    Ok(())
}

// =============================================================================
// Record Validators
// =============================================================================

/// Validates every numeric field of a line item.
pub fn validate_item(item: &Item) -> ValidationResult<()> {
    validate_identifier("sku", &item.sku)?;
    validate_price("sale_price", item.sale_price)?;
    validate_quantity(item.quantity)?;
    validate_discount(item.discount)?;
    Ok(())
}

/// Validates a catalog entry.
pub fn validate_product(product: &Product) -> ValidationResult<()> {
    validate_identifier("sku", &product.sku)?;
    validate_price("purchase_price", product.purchase_price)?;
    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_identifier() {
        assert!(validate_identifier("seller id", "seller_1").is_ok());
        assert!(validate_identifier("seller id", "7").is_ok());

        assert!(validate_identifier("seller id", "").is_err());
        assert!(validate_identifier("seller id", "   ").is_err());
    }

    #[test]
    fn test_validate_price() {
        assert!(validate_price("purchase_price", 0.0).is_ok());
        assert!(validate_price("purchase_price", 10.99).is_ok());

        assert!(validate_price("purchase_price", -0.01).is_err());
        assert!(validate_price("purchase_price", f64::INFINITY).is_err());
        assert!(validate_price("purchase_price", f64::NAN).is_err());
    }

    #[test]
    fn test_validate_finite_allows_refunds() {
        assert!(validate_finite("total_amount", -25.0).is_ok());
        assert!(validate_finite("total_amount", f64::NEG_INFINITY).is_err());
    }

    #[test]
    fn test_validate_quantity() {
        assert!(validate_quantity(1).is_ok());
        assert!(validate_quantity(1000).is_ok());
        assert!(validate_quantity(0).is_err());
    }

    #[test]
    fn test_validate_discount() {
        assert!(validate_discount(0.0).is_ok());
        assert!(validate_discount(12.5).is_ok());
        assert!(validate_discount(100.0).is_ok());

        assert!(validate_discount(-1.0).is_err());
        assert!(validate_discount(100.5).is_err());
        assert!(validate_discount(f64::NAN).is_err());
    }

    #[test]
    fn test_validate_item_reports_first_problem() {
        let item = Item::new("SKU_001", 10.0, 0, 150.0);
        let err = validate_item(&item).unwrap_err();
        assert!(matches!(err, ValidationError::MustBePositive { .. }));

        assert!(validate_item(&Item::new("SKU_001", 10.0, 2, 5.0)).is_ok());
    }

    #[test]
    fn test_validate_product() {
        assert!(validate_product(&Product::new("SKU_001", 6.35)).is_ok());
        assert!(validate_product(&Product::new("", 6.35)).is_err());
        assert!(validate_product(&Product::new("SKU_001", -1.0)).is_err());
    }
}
