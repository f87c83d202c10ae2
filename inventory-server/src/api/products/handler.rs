//! Product API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::store::models::{Product, ProductCreate, ProductUpdate, StockAdjustment};
use crate::utils::{self, AppError, AppResponse, AppResult};

/// Resolve a path id segment. Anything that does not parse as an id can
/// never be in the collection, so it reads as an unknown product.
fn parse_id(id: &str) -> Result<u64, AppError> {
    id.parse::<u64>()
        .map_err(|_| AppError::not_found("Product not found"))
}

/// GET /api/products - 获取所有商品
pub async fn list(State(state): State<ServerState>) -> Json<AppResponse<Vec<Product>>> {
    utils::ok_with_count(state.inventory.find_all())
}

/// GET /api/products/{id} - 获取单个商品
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<Product>>> {
    let product = state.inventory.find_by_id(parse_id(&id)?)?;
    Ok(utils::ok(product))
}

/// POST /api/products - 创建商品
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ProductCreate>,
) -> AppResult<(StatusCode, Json<AppResponse<Product>>)> {
    let product = state.inventory.create(payload)?;
    Ok((
        StatusCode::CREATED,
        utils::ok_with_message(product, "Product added successfully"),
    ))
}

/// PUT /api/products/{id} - 部分更新商品
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<ProductUpdate>,
) -> AppResult<Json<AppResponse<Product>>> {
    let product = state.inventory.update(parse_id(&id)?, payload)?;
    Ok(utils::ok_with_message(product, "Product updated successfully"))
}

/// PATCH /api/products/{id}/stock - 调整库存 (add / remove)
pub async fn adjust_stock(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<StockAdjustment>,
) -> AppResult<Json<AppResponse<Product>>> {
    let operation = payload.operation.clone();
    let product = state.inventory.adjust_stock(parse_id(&id)?, payload)?;

    // The store only succeeds for "add" or "remove"
    let message = match operation.as_deref() {
        Some("add") => "Stock added successfully",
        _ => "Stock removed successfully",
    };
    Ok(utils::ok_with_message(product, message))
}

/// DELETE /api/products/{id} - 删除商品
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<AppResponse<()>>> {
    state.inventory.delete(parse_id(&id)?)?;
    Ok(utils::ok_message("Product deleted successfully"))
}

/// GET /api/products/alerts/low-stock - 低库存告警列表
pub async fn low_stock(State(state): State<ServerState>) -> Json<AppResponse<Vec<Product>>> {
    utils::ok_with_count(state.inventory.low_stock())
}

/// GET /api/products/category/{category} - 按分类获取商品 (大小写不敏感)
pub async fn list_by_category(
    State(state): State<ServerState>,
    Path(category): Path<String>,
) -> Json<AppResponse<Vec<Product>>> {
    utils::ok_with_count(state.inventory.find_by_category(&category))
}
