//! Category API Handlers

use axum::Json;

use crate::store::models::DEFAULT_CATEGORIES;
use crate::utils::{self, AppResponse};

/// GET /api/categories - 获取分类列表
///
/// The list is static and process-wide; it backs the UI picker and the
/// "Other" fallback. Stored products are not constrained to it.
pub async fn list() -> Json<AppResponse<Vec<&'static str>>> {
    utils::ok(DEFAULT_CATEGORIES.to_vec())
}
