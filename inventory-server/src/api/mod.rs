//! API 路由模块
//!
//! # 结构
//!
//! - [`health`] - 健康检查
//! - [`products`] - 商品管理接口 (CRUD, 库存调整, 低库存告警, 分类筛选)
//! - [`categories`] - 分类列表接口
//! - [`statistics`] - 库存统计接口

pub mod health;

// Data models API
pub mod categories;
pub mod products;
pub mod statistics;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};
