// ==========================================
// 司法休假优化系统 - 配置错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 配置错误类型
#[derive(Error, Debug)]
pub enum ConfigError {
    // ===== 读取错误 =====
    #[error("配置文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("配置 JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ===== 校验错误 =====
    #[error("配置值超出范围 (key: {key}, value: {value}): 允许 [{min}, {max}]")]
    OutOfRange {
        key: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    #[error("阈值超出范围 (key: {key}, value: {value}): 允许 [0, 1]")]
    InvalidThreshold { key: &'static str, value: f64 },

    #[error("休庭期边界无效 (key: {key}): {month}月{day}日")]
    InvalidRecessBound {
        key: &'static str,
        month: u32,
        day: u32,
    },
}

pub type ConfigResult<T> = Result<T, ConfigError>;
