// ==========================================
// 司法休假优化系统 - 配置层
// ==========================================
// 职责: 引擎参数定义、加载、校验
// 存储: JSON 文件（可选）,缺省为内置默认值
// ==========================================

pub mod config_manager;
pub mod error;
pub mod optimizer_config;

// 重导出核心配置类型
pub use config_manager::{config_keys, ConfigManager, ConfigSource};
pub use error::{ConfigError, ConfigResult};
pub use optimizer_config::{OptimizerConfig, RecessWindowConfig};
