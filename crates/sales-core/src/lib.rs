//! # sales-core: Seller Performance Analytics
//!
//! Computes the per-seller sales report: revenue, profit, number of sales,
//! best-selling products and a rank-based bonus. Pure functions over
//! in-memory data; loading the input and rendering the report are the
//! caller's job.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Loader (JSON, CSV, DB)  ──►  SalesData                                │
//! │                                   │                                     │
//! │  ┌────────────────────────────────▼────────────────────────────────┐   │
//! │  │                 ★ sales-core (THIS CRATE) ★                      │   │
//! │  │                                                                  │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌────────────┐  │   │
//! │  │   │ revenue   │  │  bonus    │  │ analyzer  │  │ validation │  │   │
//! │  │   │ per line  │  │ per rank  │  │ pipeline  │  │  rules     │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └────────────┘  │   │
//! │  │                                                                  │   │
//! │  │   NO I/O • NO THREADS • PURE FUNCTIONS                           │   │
//! │  └────────────────────────────────┬────────────────────────────────┘   │
//! │                                   ▼                                     │
//! │   Renderer (console, CSV, UI) ◄── Vec<ReportEntry>                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Input records, per-seller accumulators, report entries
//! - [`revenue`] - Line revenue policy
//! - [`bonus`] - Rank-based bonus policy
//! - [`analyzer`] - The report pipeline
//! - [`money`] - Report rounding
//! - [`validation`] - Input rules
//! - [`config`] - Run-level settings
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use sales_core::{analyze_sales_data, AnalysisOptions};
//! use sales_core::types::{Item, Product, PurchaseRecord, SalesData, Seller};
//!
//! let data = SalesData::new(
//!     vec![Seller::new("S1", "Ann", "Lee")],
//!     vec![Product::new("P1", 10.0)],
//!     vec![PurchaseRecord::new("S1", 180.0, vec![Item::new("P1", 20.0, 10, 10.0)])],
//! );
//!
//! let report = analyze_sales_data(Some(&data), &AnalysisOptions::standard())?;
//!
//! assert_eq!(report[0].revenue, 180.0);
//! assert_eq!(report[0].profit, 80.0);
//! assert_eq!(report[0].sales_count, 1);
//! assert_eq!(report[0].bonus, 12.0);
//! # Ok::<(), sales_core::CoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analyzer;
pub mod bonus;
pub mod config;
pub mod error;
pub mod money;
pub mod revenue;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use analyzer::{analyze_sales_data, AnalysisOptions, SalesAnalyzer};
pub use bonus::{calculate_bonus_by_profit, BonusCalculator};
pub use config::{AnalyzerConfig, ConfigError, ReferencePolicy};
pub use error::{CoreError, CoreResult, ValidationError};
pub use revenue::{calculate_simple_revenue, RevenueCalculator};
pub use types::*;
