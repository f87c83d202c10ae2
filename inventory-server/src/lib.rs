//! Inventory Server - in-memory inventory tracking service
//!
//! # 架构概述
//!
//! 本模块是 Inventory Server 的主入口，提供以下核心功能：
//!
//! - **数据层** (`store`): 单一内存集合，持有全部商品记录
//! - **HTTP API** (`api`): RESTful API 接口
//! - **配置与状态** (`core`): 环境配置、服务器状态与启动
//!
//! # 模块结构
//!
//! ```text
//! inventory-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── store/         # 内存数据层
//! └── utils/         # 工具函数
//! ```

pub mod api;
pub mod core;
pub mod store;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::store::{InventoryStore, StoreError};
pub use crate::utils::{AppError, AppResponse, AppResult};

// Re-export logger functions
pub use crate::utils::logger::{init_logger, init_logger_with_file};

/// Load the environment and wire up logging.
///
/// Must run before anything logs: dotenv first so `LOG_LEVEL` / `LOG_DIR`
/// from a local `.env` are visible to the subscriber setup.
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____                      __
   /  _/___ _   _____  ____  / /_____  _______  __
   / // __ \ | / / _ \/ __ \/ __/ __ \/ ___/ / / /
 _/ // / / / |/ /  __/ / / / /_/ /_/ / /  / /_/ /
/___/_/ /_/|___/\___/_/ /_/\__/\____/_/   \__, /
                                         /____/
    "#
    );
}
