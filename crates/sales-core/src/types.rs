//! # Domain Types
//!
//! Input records, per-seller accumulators and report entries.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  INPUT (from loader)                                                    │
//! │  ┌───────────────┐  ┌───────────────┐  ┌──────────────────────────┐    │
//! │  │    Seller     │  │    Product    │  │     PurchaseRecord       │    │
//! │  │  id           │  │  sku          │  │  seller_id ──► Seller.id │    │
//! │  │  first_name   │  │  purchase_    │  │  total_amount            │    │
//! │  │  last_name    │  │    price      │  │  items: [Item]           │    │
//! │  └───────────────┘  └───────────────┘  │    sku ──► Product.sku   │    │
//! │                                        └──────────────────────────┘    │
//! │  DERIVED (one run)         OUTPUT (to renderer)                         │
//! │  ┌───────────────┐         ┌──────────────────────────┐                 │
//! │  │  SellerStat   │ ──────► │  ReportEntry             │                 │
//! │  │  revenue      │         │  revenue/profit/bonus    │                 │
//! │  │  profit       │         │    rounded to 2 places   │                 │
//! │  │  sales_count  │         │  top_products: [TopProd] │                 │
//! │  └───────────────┘         └──────────────────────────┘                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

// =============================================================================
// Identifiers
// =============================================================================

/// Accepts an identifier written either as a JSON string or a JSON number.
///
/// Loaders exported from spreadsheets often emit `"id": 7` where others emit
/// `"id": "seller_7"`; both become a `String` key.
fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    struct IdVisitor;

    impl<'de> Visitor<'de> for IdVisitor {
        type Value = String;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a string or integer identifier")
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_string<E: de::Error>(self, v: String) -> Result<String, E> {
            Ok(v)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<String, E> {
            Ok(v.to_string())
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<String, E> {
            Ok(v.to_string())
        }
    }

    deserializer.deserialize_any(IdVisitor)
}

// =============================================================================
// Seller
// =============================================================================

/// A seller whose performance is being reported.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Seller {
    /// Unique seller identifier.
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,

    pub first_name: String,

    pub last_name: String,

    /// Hiring date as supplied by the loader. Not used in the computation.
    #[serde(default)]
    pub start_date: Option<String>,

    /// Job title as supplied by the loader. Not used in the computation.
    #[serde(default)]
    pub position: Option<String>,
}

impl Seller {
    /// Creates a seller with only the fields the report needs.
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            start_date: None,
            position: None,
        }
    }

    /// Display name used in the report: `"{first_name} {last_name}"`.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product in the catalog, keyed by SKU.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Product {
    /// Stock Keeping Unit - business identifier.
    pub sku: String,

    /// What the shop paid per unit. Cost side of the profit calculation.
    pub purchase_price: f64,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub category: Option<String>,

    /// Catalog (shelf) price. Receipts carry their own `sale_price`.
    #[serde(default)]
    pub sale_price: Option<f64>,
}

impl Product {
    /// Creates a product with only the fields the report needs.
    pub fn new(sku: impl Into<String>, purchase_price: f64) -> Self {
        Self {
            sku: sku.into(),
            purchase_price,
            name: None,
            category: None,
            sale_price: None,
        }
    }
}

// =============================================================================
// Purchase Record
// =============================================================================

/// One line of a receipt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    /// SKU of the product sold.
    pub sku: String,

    /// Unit price charged before the discount.
    pub sale_price: f64,

    /// Units sold (>= 1).
    pub quantity: u32,

    /// Percentage off, 0 (none) to 100 (free).
    #[serde(default)]
    pub discount: f64,
}

impl Item {
    pub fn new(sku: impl Into<String>, sale_price: f64, quantity: u32, discount: f64) -> Self {
        Self {
            sku: sku.into(),
            sale_price,
            quantity,
            discount,
        }
    }
}

/// A receipt: one sale by one seller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PurchaseRecord {
    #[serde(default)]
    pub receipt_id: Option<String>,

    #[serde(default)]
    pub date: Option<String>,

    /// Seller who rang up the sale.
    #[serde(deserialize_with = "deserialize_id")]
    pub seller_id: String,

    #[serde(default)]
    pub customer_id: Option<String>,

    /// Receipt total. Added to the seller's revenue as-is.
    pub total_amount: f64,

    #[serde(default)]
    pub total_discount: Option<f64>,

    pub items: Vec<Item>,
}

impl PurchaseRecord {
    pub fn new(seller_id: impl Into<String>, total_amount: f64, items: Vec<Item>) -> Self {
        Self {
            receipt_id: None,
            date: None,
            seller_id: seller_id.into(),
            customer_id: None,
            total_amount,
            total_discount: None,
            items,
        }
    }
}

// =============================================================================
// Sales Data
// =============================================================================

/// Everything the analyzer needs, as handed over by the loader.
///
/// `sellers` is optional so that a payload without a seller list can be
/// told apart from a malformed one and reported as invalid input.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SalesData {
    #[serde(default)]
    pub sellers: Option<Vec<Seller>>,

    #[serde(default)]
    pub products: Vec<Product>,

    #[serde(default)]
    pub purchase_records: Vec<PurchaseRecord>,
}

impl SalesData {
    pub fn new(
        sellers: Vec<Seller>,
        products: Vec<Product>,
        purchase_records: Vec<PurchaseRecord>,
    ) -> Self {
        Self {
            sellers: Some(sellers),
            products,
            purchase_records,
        }
    }
}

// =============================================================================
// Seller Stat
// =============================================================================

/// Running totals for one seller during one analysis run.
///
/// Revenue and profit keep full precision here; rounding happens when the
/// stat is projected into a [`ReportEntry`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SellerStat {
    pub id: String,
    pub name: String,
    pub revenue: f64,
    pub profit: f64,
    pub sales_count: u32,

    /// Quantity per SKU, in the order each SKU was first sold.
    products_sold: Vec<TopProduct>,

    #[serde(skip)]
    sku_slots: HashMap<String, usize>,
}

impl SellerStat {
    /// Zeroed accumulators for `seller`.
    pub fn new(seller: &Seller) -> Self {
        Self {
            id: seller.id.clone(),
            name: seller.full_name(),
            revenue: 0.0,
            profit: 0.0,
            sales_count: 0,
            products_sold: Vec::new(),
            sku_slots: HashMap::new(),
        }
    }

    /// Adds `quantity` units of `sku` to this seller's sold counter.
    pub fn record_units(&mut self, sku: &str, quantity: u32) {
        match self.sku_slots.get(sku) {
            Some(&slot) => {
                let entry = &mut self.products_sold[slot];
                entry.quantity = entry.quantity.saturating_add(quantity);
            }
            None => {
                self.sku_slots
                    .insert(sku.to_string(), self.products_sold.len());
                self.products_sold.push(TopProduct {
                    sku: sku.to_string(),
                    quantity,
                });
            }
        }
    }

    /// Units of `sku` sold so far (0 if never sold).
    #[cfg(test)]
    fn units_sold(&self, sku: &str) -> u32 {
        self.sku_slots
            .get(sku)
            .map(|&slot| self.products_sold[slot].quantity)
            .unwrap_or(0)
    }

    /// All SKUs sold, in first-encounter order.
    pub fn products_sold(&self) -> &[TopProduct] {
        &self.products_sold
    }

    /// The `limit` best-selling SKUs by quantity, descending.
    ///
    /// The sort is stable: SKUs with equal quantities keep the order in which
    /// the seller first sold them.
    pub fn top_products(&self, limit: usize) -> Vec<TopProduct> {
        let mut ranked = self.products_sold.clone();
        ranked.sort_by(|a, b| b.quantity.cmp(&a.quantity));
        ranked.truncate(limit);
        ranked
    }
}

// =============================================================================
// Report
// =============================================================================

/// A SKU and how many units a seller sold of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TopProduct {
    pub sku: String,
    pub quantity: u32,
}

/// One row of the finished report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReportEntry {
    pub seller_id: String,
    pub name: String,
    /// Rounded to 2 decimal places.
    pub revenue: f64,
    /// Rounded to 2 decimal places.
    pub profit: f64,
    pub sales_count: u32,
    pub top_products: Vec<TopProduct>,
    /// Rounded to 2 decimal places.
    pub bonus: f64,
}

// =============================================================================
// Unit Tests
// =============================================================================
