//! # Error Types
//!
//! Domain-specific error types for sales-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  CoreError                                                             │
//! │  ├── OptionsIncomplete  - a revenue/bonus calculator was not supplied  │
//! │  ├── InvalidInput       - data or sellers missing/empty                │
//! │  ├── UnknownSeller      - receipt points at a seller that isn't listed │
//! │  ├── UnknownProduct     - line item points at an unlisted SKU          │
//! │  ├── InvalidItem        - line item breaks its numeric contract        │
//! │  ├── Validation         - wraps ValidationError                        │
//! │  └── Config             - wraps ConfigError                            │
//! │                                                                         │
//! │  ConfigError (config.rs) - malformed environment overrides             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every variant aborts the whole run. There is no partial report.

use thiserror::Error;

use crate::config::ConfigError;

// =============================================================================
// Core Error
// =============================================================================

/// Errors raised by a sales analysis run.
#[derive(Debug, Error)]
pub enum CoreError {
    /// One or both calculators are missing from the options.
    ///
    /// Checked before anything else, including the input data.
    #[error("Analysis options incomplete: missing {missing}")]
    OptionsIncomplete { missing: String },

    /// Input data is absent, or the seller list is absent or empty.
    #[error("Invalid input data: {reason}")]
    InvalidInput { reason: String },

    /// A purchase record references a seller id that is not in the seller list.
    #[error("Purchase record {record_index} references unknown seller '{seller_id}'")]
    UnknownSeller {
        seller_id: String,
        record_index: usize,
    },

    /// A line item references a SKU that is not in the product list.
    #[error("Purchase record {record_index} references unknown product '{sku}'")]
    UnknownProduct { sku: String, record_index: usize },

    /// A line item has an out-of-range price, quantity or discount.
    #[error("Purchase record {record_index}, item {item_index}: {source}")]
    InvalidItem {
        record_index: usize,
        item_index: usize,
        #[source]
        source: ValidationError,
    },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Analyzer settings the run cannot honour (e.g. a zero top-products limit).
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Field-level validation failures.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Value must be zero or greater.
    #[error("{field} must not be negative")]
    Negative { field: String },

    /// NaN or infinity.
    #[error("{field} must be a finite number")]
    NotFinite { field: String },

    /// Duplicate value (e.g., duplicate SKU).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
