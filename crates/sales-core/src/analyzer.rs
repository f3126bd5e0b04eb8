//! # Sales Analyzer
//!
//! Turns sellers, products and receipts into the ranked seller report.
//!
//! ## Pipeline
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  options complete? ──► sellers present? ──► validate catalog            │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │   seller_id → SellerStat        sku → Product   (hash indexes)          │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │   for each receipt:  sales_count += 1, revenue += total_amount          │
//! │     for each item:   profit += revenue(item) − purchase_price × qty     │
//! │                      units[sku] += qty                                  │
//! │                                                  │                      │
//! │                                                  ▼                      │
//! │   stable sort by profit (desc) ──► bonus(rank) + top products ──► round │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//! ```rust
//! use sales_core::analyzer::{analyze_sales_data, AnalysisOptions};
//! use sales_core::types::{Item, Product, PurchaseRecord, SalesData, Seller};
//!
//! let data = SalesData::new(
//!     vec![Seller::new("S1", "Ann", "Lee")],
//!     vec![Product::new("P1", 10.0)],
//!     vec![PurchaseRecord::new("S1", 180.0, vec![Item::new("P1", 20.0, 10, 10.0)])],
//! );
//!
//! let report = analyze_sales_data(Some(&data), &AnalysisOptions::standard()).unwrap();
//! assert_eq!(report[0].profit, 80.0);
//! assert_eq!(report[0].bonus, 12.0);
//! ```

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::bonus::{calculate_bonus_by_profit, BonusCalculator};
use crate::config::{AnalyzerConfig, ReferencePolicy};
use crate::error::{CoreError, CoreResult, ValidationError};
use crate::money::round_money;
use crate::revenue::{calculate_simple_revenue, RevenueCalculator};
use crate::types::{Product, ReportEntry, SalesData, Seller, SellerStat};
use crate::validation::{validate_finite, validate_identifier, validate_item, validate_product};

// =============================================================================
// Options
// =============================================================================

/// Policies and settings for one or more analysis runs.
///
/// Both calculators are required; a run with either missing fails with
/// [`CoreError::OptionsIncomplete`] before the data is looked at.
#[derive(Clone, Default)]
pub struct AnalysisOptions {
    pub calculate_revenue: Option<Arc<dyn RevenueCalculator>>,
    pub calculate_bonus: Option<Arc<dyn BonusCalculator>>,
    pub config: AnalyzerConfig,
}

impl AnalysisOptions {
    /// Empty options: no calculators, default config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Discounted-line revenue and profit-rank bonus tiers.
    pub fn standard() -> Self {
        Self::new()
            .with_revenue_calculator(calculate_simple_revenue)
            .with_bonus_calculator(calculate_bonus_by_profit)
    }

    pub fn with_revenue_calculator(mut self, calculator: impl RevenueCalculator + 'static) -> Self {
        self.calculate_revenue = Some(Arc::new(calculator));
        self
    }

    pub fn with_bonus_calculator(mut self, calculator: impl BonusCalculator + 'static) -> Self {
        self.calculate_bonus = Some(Arc::new(calculator));
        self
    }

    pub fn with_config(mut self, config: AnalyzerConfig) -> Self {
        self.config = config;
        self
    }
}

impl fmt::Debug for AnalysisOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisOptions")
            .field("calculate_revenue", &self.calculate_revenue.is_some())
            .field("calculate_bonus", &self.calculate_bonus.is_some())
            .field("config", &self.config)
            .finish()
    }
}

// =============================================================================
// Analyzer
// =============================================================================

/// An analyzer whose options have already been checked.
pub struct SalesAnalyzer {
    revenue: Arc<dyn RevenueCalculator>,
    bonus: Arc<dyn BonusCalculator>,
    config: AnalyzerConfig,
}

impl SalesAnalyzer {
    /// Checks that both calculators are present and the config is usable.
    pub fn new(options: &AnalysisOptions) -> CoreResult<Self> {
        let analyzer = match (&options.calculate_revenue, &options.calculate_bonus) {
            (Some(revenue), Some(bonus)) => Self {
                revenue: Arc::clone(revenue),
                bonus: Arc::clone(bonus),
                config: options.config.clone(),
            },
            (revenue, bonus) => {
                let missing: Vec<&str> = [
                    revenue.is_none().then_some("calculate_revenue"),
                    bonus.is_none().then_some("calculate_bonus"),
                ]
                .into_iter()
                .flatten()
                .collect();
                return Err(CoreError::OptionsIncomplete {
                    missing: missing.join(", "),
                });
            }
        };

        analyzer.config.validate()?;
        Ok(analyzer)
    }

    /// Runs the full analysis. Output is ordered by profit, highest first,
    /// and has one entry per seller.
    pub fn analyze(&self, data: &SalesData) -> CoreResult<Vec<ReportEntry>> {
        let sellers = data
            .sellers
            .as_deref()
            .ok_or_else(|| CoreError::InvalidInput {
                reason: "sellers must be a list".to_string(),
            })?;
        if sellers.is_empty() {
            return Err(CoreError::InvalidInput {
                reason: "sellers must not be empty".to_string(),
            });
        }

        info!(
            sellers = sellers.len(),
            products = data.products.len(),
            purchase_records = data.purchase_records.len(),
            "Analyzing sales data"
        );

        let (mut stats, seller_index) = index_sellers(sellers)?;
        let product_index = index_products(&data.products)?;

        for (record_index, record) in data.purchase_records.iter().enumerate() {
            let Some(&slot) = seller_index.get(record.seller_id.as_str()) else {
                match self.config.reference_policy {
                    ReferencePolicy::Fail => {
                        return Err(CoreError::UnknownSeller {
                            seller_id: record.seller_id.clone(),
                            record_index,
                        })
                    }
                    ReferencePolicy::Skip => {
                        warn!(record_index, seller_id = %record.seller_id, "Skipping receipt of unknown seller");
                        continue;
                    }
                }
            };
            validate_finite("total_amount", record.total_amount)?;

            let stat = &mut stats[slot];
            stat.sales_count += 1;
            stat.revenue += record.total_amount;

            for (item_index, item) in record.items.iter().enumerate() {
                validate_item(item).map_err(|source| CoreError::InvalidItem {
                    record_index,
                    item_index,
                    source,
                })?;

                let Some(product) = product_index.get(item.sku.as_str()) else {
                    match self.config.reference_policy {
                        ReferencePolicy::Fail => {
                            return Err(CoreError::UnknownProduct {
                                sku: item.sku.clone(),
                                record_index,
                            })
                        }
                        ReferencePolicy::Skip => {
                            warn!(record_index, item_index, sku = %item.sku, "Skipping item of unknown product");
                            continue;
                        }
                    }
                };

                let cost = product.purchase_price * f64::from(item.quantity);
                let revenue = self.revenue.revenue(item, product);
                stat.profit += revenue - cost;
                stat.record_units(&item.sku, item.quantity);
            }
        }

        // Stable: equal profits keep seller input order.
        stats.sort_by(|a, b| b.profit.total_cmp(&a.profit));

        let total = stats.len();
        let limit = self.config.top_products_limit;
        let report: Vec<ReportEntry> = stats
            .into_iter()
            .enumerate()
            .map(|(rank, stat)| {
                let bonus = self.bonus.bonus(rank, total, &stat);
                debug!(rank, seller_id = %stat.id, profit = stat.profit, bonus, "Ranked seller");
                ReportEntry {
                    top_products: stat.top_products(limit),
                    revenue: round_money(stat.revenue),
                    profit: round_money(stat.profit),
                    bonus: round_money(bonus),
                    sales_count: stat.sales_count,
                    seller_id: stat.id,
                    name: stat.name,
                }
            })
            .collect();

        info!(entries = report.len(), "Sales analysis complete");
        Ok(report)
    }
}

/// One-shot analysis.
///
/// `data` is optional so a caller whose loader produced nothing gets the
/// same invalid-input error as one whose payload had no sellers. Options are
/// checked first.
pub fn analyze_sales_data(
    data: Option<&SalesData>,
    options: &AnalysisOptions,
) -> CoreResult<Vec<ReportEntry>> {
    let analyzer = SalesAnalyzer::new(options)?;
    let data = data.ok_or_else(|| CoreError::InvalidInput {
        reason: "no data supplied".to_string(),
    })?;
    analyzer.analyze(data)
}

// =============================================================================
// Indexes
// =============================================================================

fn index_sellers(sellers: &[Seller]) -> CoreResult<(Vec<SellerStat>, HashMap<&str, usize>)> {
    let mut stats = Vec::with_capacity(sellers.len());
    let mut index = HashMap::with_capacity(sellers.len());

    for seller in sellers {
        validate_identifier("seller id", &seller.id)?;
        if index.insert(seller.id.as_str(), stats.len()).is_some() {
            return Err(ValidationError::Duplicate {
                field: "seller id".to_string(),
                value: seller.id.clone(),
            }
            .into());
        }
        stats.push(SellerStat::new(seller));
    }

    Ok((stats, index))
}

fn index_products(products: &[Product]) -> CoreResult<HashMap<&str, &Product>> {
    let mut index = HashMap::with_capacity(products.len());

    for product in products {
        validate_product(product)?;
        if index.insert(product.sku.as_str(), product).is_some() {
            return Err(ValidationError::Duplicate {
                field: "sku".to_string(),
                value: product.sku.clone(),
            }
            .into());
        }
    }

    Ok(index)
}

// =============================================================================
// Unit Tests
// =============================================================================
