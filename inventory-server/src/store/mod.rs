//! 数据层 - 内存商品集合
//!
//! Provides CRUD operations over the single in-memory product collection.
//! There is no persistence: the collection lives for the process lifetime
//! and is lost on restart.

pub mod models;
pub mod serde_helpers;

mod inventory;


// Re-exports
pub use inventory::InventoryStore;

use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found")]
    NotFound,

    #[error("{0}")]
    Validation(String),

    #[error("Insufficient stock")]
    InsufficientStock,

    #[error("Invalid operation")]
    InvalidOperation,
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
