//! Statistics API Handlers

use axum::{Json, extract::State};

use crate::core::ServerState;
use crate::store::models::InventoryStats;
use crate::utils::{self, AppResponse};

/// GET /api/statistics - 获取库存统计
///
/// 空集合返回全零统计 (`totalValue` 为 "0.00")
pub async fn get_statistics(State(state): State<ServerState>) -> Json<AppResponse<InventoryStats>> {
    utils::ok(state.inventory.statistics())
}
