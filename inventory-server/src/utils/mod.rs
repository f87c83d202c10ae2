//! 工具模块 - 通用工具函数和类型
//!
//! # 内容
//!
//! - [`AppError`] / [`AppResponse`] - 应用错误类型和响应结构
//! - [`money`] - 金额计算
//! - [`logger`] - 日志设置

pub mod error;
pub mod logger;
pub mod money;
pub mod result;

// Re-export error types and response helpers
pub use error::{AppError, AppResponse};
pub use error::{ok, ok_message, ok_with_count, ok_with_message};
pub use result::AppResult;
