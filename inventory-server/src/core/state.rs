use crate::core::Config;
use crate::store::InventoryStore;

/// 服务器状态 - 持有所有服务的共享引用
///
/// ServerState 是服务的核心数据结构。使用 Arc 实现浅拷贝，
/// 所有权成本极低，每个请求处理器都持有一份克隆。
///
/// # 服务组件
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | inventory | InventoryStore | 内存商品集合 |
///
/// # 使用示例
///
/// ```ignore
/// let state = ServerState::initialize(&config);
/// let products = state.inventory.find_all();
/// ```
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 商品集合 (内部通过 Arc 共享)
    pub inventory: InventoryStore,
}

impl ServerState {
    /// 创建服务器状态 (手动构造)
    ///
    /// 通常使用 [`ServerState::initialize`] 方法代替
    pub fn new(config: Config, inventory: InventoryStore) -> Self {
        Self { config, inventory }
    }

    /// 初始化服务器状态
    ///
    /// 集合从空开始：数据源是易失的，进程重启即清空。
    pub fn initialize(config: &Config) -> Self {
        Self::new(config.clone(), InventoryStore::new())
    }
}
