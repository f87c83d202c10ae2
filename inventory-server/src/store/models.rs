//! Product Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::serde_helpers::NumericInput;

/// Fixed category labels used to populate the UI picker and as the
/// fallback. Not enforced as an enum: any non-empty string is stored as-is.
pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Electronics",
    "Clothing",
    "Food",
    "Furniture",
    "Books",
    "Other",
];

/// Fallback when a payload omits the category
pub const DEFAULT_CATEGORY: &str = "Other";

/// Product model
///
/// 序列化为 camelCase，与 HTTP API 的字段命名一致
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Assigned by the store; starts at 1, strictly increasing, never reused
    pub id: u64,
    pub name: String,
    /// Current stock count (>= 0)
    pub quantity: i64,
    pub price: f64,
    /// Threshold at or below which stock is considered low
    pub reorder_level: i64,
    /// Days to replenish
    pub lead_time: i64,
    pub category: String,
    pub created_at: DateTime<Utc>,
    /// Absent until the first successful update
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Product {
    /// A product is low on stock when quantity is at or below its reorder level.
    pub fn is_low_stock(&self) -> bool {
        self.quantity <= self.reorder_level
    }
}

/// Create payload. Every field is optional so that presence failures are
/// reported through the store's validation path instead of a serde reject.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductCreate {
    pub name: Option<String>,
    pub quantity: Option<NumericInput>,
    pub price: Option<NumericInput>,
    pub reorder_level: Option<NumericInput>,
    pub lead_time: Option<NumericInput>,
    pub category: Option<String>,
}

/// Partial-update payload. `Some` means "field provided" — including
/// `Some(0)` and `Some("")` — and `None` means "keep the current value".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    pub name: Option<String>,
    pub quantity: Option<NumericInput>,
    pub price: Option<NumericInput>,
    pub reorder_level: Option<NumericInput>,
    pub lead_time: Option<NumericInput>,
    pub category: Option<String>,
}

/// Stock adjustment payload (`operation` is "add" or "remove")
#[derive(Debug, Clone, Deserialize)]
pub struct StockAdjustment {
    pub operation: Option<String>,
    pub amount: Option<NumericInput>,
}

/// Aggregate statistics over the whole collection
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InventoryStats {
    pub total_products: usize,
    pub total_items: i64,
    /// Sum of quantity × price, two-decimal display convention ("25.00")
    pub total_value: String,
    pub low_stock_count: usize,
    pub categories: Vec<&'static str>,
}
