//! Inventory Store
//!
//! The single authoritative collection of products plus the next-id counter.
//!
//! # 并发约定
//!
//! 集合与 id 计数器由同一把 `RwLock` 保护：写操作 (create / update /
//! delete / adjust_stock) 串行执行，读操作并发进行。锁从不跨 `.await`
//! 持有。Validation runs under the write lock before any mutation, so a
//! failed operation leaves both the collection and the counter untouched.

use std::sync::Arc;

use chrono::Utc;
use parking_lot::RwLock;
use rust_decimal::Decimal;

use crate::utils::money;

use super::models::{
    DEFAULT_CATEGORIES, DEFAULT_CATEGORY, InventoryStats, Product, ProductCreate, ProductUpdate,
    StockAdjustment,
};
use super::{StoreError, StoreResult};

/// Parsed stock operation
enum StockOperation {
    Add,
    Remove,
}

#[derive(Debug)]
struct Inner {
    products: Vec<Product>,
    next_id: u64,
}

/// In-memory product store (cheap to clone, shared via `Arc`)
#[derive(Debug, Clone)]
pub struct InventoryStore {
    inner: Arc<RwLock<Inner>>,
}

impl InventoryStore {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(Inner {
                products: Vec::new(),
                next_id: 1,
            })),
        }
    }

    /// All products in insertion order
    pub fn find_all(&self) -> Vec<Product> {
        self.inner.read().products.clone()
    }

    pub fn find_by_id(&self, id: u64) -> StoreResult<Product> {
        self.inner
            .read()
            .products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    /// Create a new product
    pub fn create(&self, data: ProductCreate) -> StoreResult<Product> {
        let name = required_name(data.name.as_deref())?;
        let quantity = required_non_negative_i64(data.quantity.as_ref(), "quantity")?;
        let price = required_non_negative_f64(data.price.as_ref(), "price")?;
        let reorder_level = required_non_negative_i64(data.reorder_level.as_ref(), "reorderLevel")?;
        let lead_time = required_non_negative_i64(data.lead_time.as_ref(), "leadTime")?;
        let category = normalize_category(data.category.as_deref());

        let mut inner = self.inner.write();
        let product = Product {
            id: inner.next_id,
            name,
            quantity,
            price,
            reorder_level,
            lead_time,
            category,
            created_at: Utc::now(),
            updated_at: None,
        };
        inner.next_id += 1;
        inner.products.push(product.clone());

        tracing::debug!(id = product.id, name = %product.name, "Product created");
        Ok(product)
    }

    /// Partial update. The id check comes first (an unknown product is
    /// NotFound no matter what the payload holds), then every provided
    /// field is coerced and validated before any mutation, so a rejected
    /// payload never half-applies.
    pub fn update(&self, id: u64, data: ProductUpdate) -> StoreResult<Product> {
        let mut inner = self.inner.write();
        let index = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        let name = data
            .name
            .as_deref()
            .map(|v| required_name(Some(v)))
            .transpose()?;
        let quantity = data
            .quantity
            .as_ref()
            .map(|n| non_negative_i64(n, "quantity"))
            .transpose()?;
        let price = data
            .price
            .as_ref()
            .map(|n| non_negative_f64(n, "price"))
            .transpose()?;
        let reorder_level = data
            .reorder_level
            .as_ref()
            .map(|n| non_negative_i64(n, "reorderLevel"))
            .transpose()?;
        let lead_time = data
            .lead_time
            .as_ref()
            .map(|n| non_negative_i64(n, "leadTime"))
            .transpose()?;
        let category = data
            .category
            .as_deref()
            .map(|v| normalize_category(Some(v)));

        let product = &mut inner.products[index];

        if let Some(v) = name {
            product.name = v;
        }
        if let Some(v) = quantity {
            product.quantity = v;
        }
        if let Some(v) = price {
            product.price = v;
        }
        if let Some(v) = reorder_level {
            product.reorder_level = v;
        }
        if let Some(v) = lead_time {
            product.lead_time = v;
        }
        if let Some(v) = category {
            product.category = v;
        }
        product.updated_at = Some(Utc::now());

        Ok(product.clone())
    }

    /// Add or remove stock. Removal never drives quantity below zero.
    pub fn adjust_stock(&self, id: u64, data: StockAdjustment) -> StoreResult<Product> {
        let mut inner = self.inner.write();
        let product = inner
            .products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;

        let operation = match data.operation.as_deref() {
            Some("add") => StockOperation::Add,
            Some("remove") => StockOperation::Remove,
            _ => return Err(StoreError::InvalidOperation),
        };

        let amount = data
            .amount
            .as_ref()
            .ok_or_else(|| StoreError::Validation("amount is required".into()))
            .and_then(|n| non_negative_i64(n, "amount"))?;

        match operation {
            StockOperation::Add => product.quantity += amount,
            StockOperation::Remove => {
                if amount > product.quantity {
                    return Err(StoreError::InsufficientStock);
                }
                product.quantity -= amount;
            }
        }

        Ok(product.clone())
    }

    /// Remove a product. Its id is never handed out again.
    pub fn delete(&self, id: u64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        let index = inner
            .products
            .iter()
            .position(|p| p.id == id)
            .ok_or(StoreError::NotFound)?;
        inner.products.remove(index);
        tracing::debug!(id, "Product deleted");
        Ok(())
    }

    /// Products at or below their reorder level, in collection order
    pub fn low_stock(&self) -> Vec<Product> {
        self.inner
            .read()
            .products
            .iter()
            .filter(|p| p.is_low_stock())
            .cloned()
            .collect()
    }

    /// Case-insensitive category filter. Stored casing is untouched, so
    /// "electronics" matches both "Electronics" and "ELECTRONICS".
    pub fn find_by_category(&self, category: &str) -> Vec<Product> {
        let wanted = category.to_lowercase();
        self.inner
            .read()
            .products
            .iter()
            .filter(|p| p.category.to_lowercase() == wanted)
            .cloned()
            .collect()
    }

    /// Aggregate statistics over the full collection
    pub fn statistics(&self) -> InventoryStats {
        let inner = self.inner.read();

        let total_items = inner.products.iter().map(|p| p.quantity).sum();
        let total_value: Decimal = inner
            .products
            .iter()
            .map(|p| Decimal::from(p.quantity) * money::to_decimal(p.price))
            .sum();
        let low_stock_count = inner.products.iter().filter(|p| p.is_low_stock()).count();

        InventoryStats {
            total_products: inner.products.len(),
            total_items,
            total_value: money::format_money(total_value),
            low_stock_count,
            categories: DEFAULT_CATEGORIES.to_vec(),
        }
    }
}

impl Default for InventoryStore {
    fn default() -> Self {
        Self::new()
    }
}

// ========== Validation helpers ==========

fn required_name(name: Option<&str>) -> StoreResult<String> {
    match name {
        Some(v) if !v.trim().is_empty() => Ok(v.to_string()),
        _ => Err(StoreError::Validation("name must not be empty".into())),
    }
}

/// Absent or blank categories fall back to the default label.
fn normalize_category(category: Option<&str>) -> String {
    match category {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => DEFAULT_CATEGORY.to_string(),
    }
}

fn non_negative_i64(value: &super::serde_helpers::NumericInput, field: &str) -> StoreResult<i64> {
    let v = value.to_i64(field)?;
    if v < 0 {
        return Err(StoreError::Validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(v)
}

fn non_negative_f64(value: &super::serde_helpers::NumericInput, field: &str) -> StoreResult<f64> {
    let v = value.to_f64(field)?;
    if v < 0.0 {
        return Err(StoreError::Validation(format!(
            "{field} must not be negative"
        )));
    }
    Ok(v)
}

fn required_non_negative_i64(
    value: Option<&super::serde_helpers::NumericInput>,
    field: &str,
) -> StoreResult<i64> {
    let value = value.ok_or_else(|| StoreError::Validation(format!("{field} is required")))?;
    non_negative_i64(value, field)
}

fn required_non_negative_f64(
    value: Option<&super::serde_helpers::NumericInput>,
    field: &str,
) -> StoreResult<f64> {
    let value = value.ok_or_else(|| StoreError::Validation(format!("{field} is required")))?;
    non_negative_f64(value, field)
}
