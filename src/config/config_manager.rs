// ==========================================
// 司法休假优化系统 - 配置管理器
// ==========================================
// 职责: 配置加载、校验、快照
// 来源优先级: 显式路径 > 环境变量 > 用户配置目录 > 默认值
// ==========================================

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::optimizer_config::OptimizerConfig;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

// ==========================================
// ConfigSource - 配置来源
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,        // 内置默认值
    Inline,         // JSON 字符串
    File(PathBuf),  // JSON 文件
}

// ==========================================
// ConfigManager - 配置管理器
// ==========================================
#[derive(Debug, Clone)]
pub struct ConfigManager {
    config: Arc<OptimizerConfig>,
    source: ConfigSource,
}

impl ConfigManager {
    /// 使用内置默认值
    pub fn new() -> Self {
        Self {
            config: Arc::new(OptimizerConfig::default()),
            source: ConfigSource::Default,
        }
    }

    /// 从已构造的配置创建（会执行校验）
    pub fn from_config(config: OptimizerConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            config: Arc::new(config),
            source: ConfigSource::Inline,
        })
    }

    /// 从 JSON 字符串加载
    ///
    /// 缺失字段取默认值
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: OptimizerConfig = serde_json::from_str(json)?;
        Self::from_config(config)
    }

    /// 从 JSON 文件加载
    ///
    /// # 参数
    /// - path: 配置文件路径
    pub fn from_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::FileRead {
            path: path.display().to_string(),
            source,
        })?;

        let mut manager = Self::from_json_str(&raw)?;
        manager.source = ConfigSource::File(path.to_path_buf());
        info!(path = %path.display(), "配置文件加载完成");
        Ok(manager)
    }

    /// 按优先级自动加载
    ///
    /// 1) 环境变量 VACATION_OPTIMIZER_CONFIG 指定的文件（必须存在）
    /// 2) 用户配置目录下的 vacation-optimizer/config.json（存在才读）
    /// 3) 内置默认值
    pub fn load() -> ConfigResult<Self> {
        if let Ok(path) = std::env::var(config_keys::ENV_CONFIG_PATH) {
            let path = path.trim();
            if !path.is_empty() {
                debug!(path, "使用环境变量指定的配置文件");
                return Self::from_file(path);
            }
        }

        if let Some(path) = Self::default_config_path() {
            if path.is_file() {
                return Self::from_file(path);
            }
        }

        debug!("未找到配置文件,使用默认配置");
        Ok(Self::new())
    }

    /// 默认配置文件路径
    pub fn default_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| {
            dir.join(config_keys::CONFIG_DIR_NAME)
                .join(config_keys::CONFIG_FILE_NAME)
        })
    }

    pub fn config(&self) -> Arc<OptimizerConfig> {
        self.config.clone()
    }

    pub fn source(&self) -> &ConfigSource {
        &self.source
    }

    /// 获取配置快照（JSON格式）
    ///
    /// # 用途
    /// - 与建议结果一起记录,便于复现
    pub fn get_config_snapshot(&self) -> ConfigResult<String> {
        Ok(serde_json::to_string(self.config.as_ref())?)
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

// ==========================================
// 配置键常量
// ==========================================
pub mod config_keys {
    // 环境变量
    pub const ENV_CONFIG_PATH: &str = "VACATION_OPTIMIZER_CONFIG";
    pub const ENV_SLOW_SCAN_MS: &str = "VACATION_OPTIMIZER_SLOW_SCAN_MS";

    // 默认配置文件位置
    pub const CONFIG_DIR_NAME: &str = "vacation-optimizer";
    pub const CONFIG_FILE_NAME: &str = "config.json";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_manager() {
        let manager = ConfigManager::new();
        assert_eq!(manager.source(), &ConfigSource::Default);
        assert_eq!(manager.config().shift_window, 7);
    }

    #[test]
    fn test_invalid_json_rejected() {
        let err = ConfigManager::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, ConfigError::JsonParse(_)));
    }

    #[test]
    fn test_validation_runs_on_load() {
        let err = ConfigManager::from_json_str(r#"{"fraction_count": 0}"#).unwrap_err();
        assert!(matches!(err, ConfigError::OutOfRange { key: "fraction_count", .. }));
    }

    #[test]
    fn test_snapshot_round_trip() {
        let manager = ConfigManager::from_json_str(r#"{"bridge_max_gap": 2}"#).unwrap();
        let snapshot = manager.get_config_snapshot().unwrap();
        let restored = ConfigManager::from_json_str(&snapshot).unwrap();
        assert_eq!(restored.config().bridge_max_gap, 2);
        assert_eq!(restored.config().as_ref(), manager.config().as_ref());
    }
}
