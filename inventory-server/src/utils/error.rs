//! 统一错误处理
//!
//! 提供应用级错误类型和响应结构：
//! - [`AppError`] - 应用错误枚举
//! - [`AppResponse`] - API 响应结构
//!
//! # 错误分类
//!
//! | 分类 | HTTP | 示例 |
//! |------|------|------|
//! | InvalidInput | 400 | 缺少名称、负数量、非数字文本 |
//! | NotFound | 404 | 未知商品 id |
//! | InsufficientStock | 400 | 出库数量超过库存 |
//! | InvalidOperation | 400 | 库存操作不是 add / remove |
//! | Internal | 500 | 内部错误 |
//!
//! # 使用示例
//!
//! ```ignore
//! // 返回错误
//! Err(AppError::not_found("Product not found"))
//!
//! // 返回成功响应
//! Ok(utils::ok(data))
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use tracing::error;

use crate::store::StoreError;

/// API 统一响应结构
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "count": 3,
///   "message": "Product added successfully"
/// }
/// ```
///
/// 缺省字段不序列化：错误响应仅含 `success` 和 `message`。
#[derive(Debug, Serialize)]
pub struct AppResponse<T> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// 列表长度 (仅列表响应)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
    /// 消息
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// 应用错误枚举
///
/// All request-scoped and recoverable; the process never dies on one.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 验证失败 (400)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// 资源不存在 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 库存不足 (400)
    #[error("Insufficient stock: {0}")]
    InsufficientStock(String),

    /// 无效库存操作 (400)
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// 内部错误 (500)
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidInput(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.as_str()),
            AppError::InsufficientStock(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),
            AppError::InvalidOperation(msg) => (StatusCode::BAD_REQUEST, msg.as_str()),

            // 记录内部错误但不暴露详细信息
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(AppResponse::<()> {
            success: false,
            data: None,
            count: None,
            message: Some(message.to_string()),
        });

        (status, body).into_response()
    }
}

impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => AppError::NotFound("Product not found".into()),
            StoreError::Validation(msg) => AppError::InvalidInput(msg),
            StoreError::InsufficientStock => {
                AppError::InsufficientStock("Insufficient stock".into())
            }
            StoreError::InvalidOperation => AppError::InvalidOperation("Invalid operation".into()),
        }
    }
}

// ========== Helper Constructors ==========

impl AppError {
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

// ========== Helper functions ==========

/// Create a successful response
pub fn ok<T: Serialize>(data: T) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        data: Some(data),
        count: None,
        message: None,
    })
}

/// Create a successful list response with its length
pub fn ok_with_count<T: Serialize>(data: Vec<T>) -> Json<AppResponse<Vec<T>>> {
    let count = data.len();
    Json(AppResponse {
        success: true,
        data: Some(data),
        count: Some(count),
        message: None,
    })
}

/// Create a successful response with custom message
pub fn ok_with_message<T: Serialize>(data: T, message: impl Into<String>) -> Json<AppResponse<T>> {
    Json(AppResponse {
        success: true,
        data: Some(data),
        count: None,
        message: Some(message.into()),
    })
}

/// Create a successful response carrying only a message (e.g. delete)
pub fn ok_message(message: impl Into<String>) -> Json<AppResponse<()>> {
    Json(AppResponse {
        success: true,
        data: None,
        count: None,
        message: Some(message.into()),
    })
}
