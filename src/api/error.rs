// ==========================================
// 司法休假优化系统 - API层错误类型
// ==========================================
// 职责: 定义API层错误类型,把下层错误转换为可读的错误消息
// 约束: 所有错误信息必须包含显式原因
// ==========================================

use crate::calendar::CalendarError;
use crate::config::ConfigError;
use chrono::NaiveDate;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    // ==========================================
    // 输入错误
    // ==========================================
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("区间首尾倒置: start={start}, end={end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },

    #[error("参数超出范围: {field}={value}, 允许 [{min}, {max}]")]
    OutOfBounds {
        field: &'static str,
        value: i64,
        min: i64,
        max: i64,
    },

    // ==========================================
    // 下层错误
    // ==========================================
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Calendar(#[from] CalendarError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_are_explicit() {
        let err = ApiError::OutOfBounds {
            field: "length",
            value: 400,
            min: 1,
            max: 366,
        };
        let msg = err.to_string();
        assert!(msg.contains("length=400"));
        assert!(msg.contains("366"));

        let err = ApiError::InvertedRange {
            start: NaiveDate::from_ymd_opt(2024, 5, 10).unwrap(),
            end: NaiveDate::from_ymd_opt(2024, 5, 5).unwrap(),
        };
        assert!(err.to_string().contains("2024-05-10"));
    }

    #[test]
    fn test_from_config_error() {
        let err: ApiError = ConfigError::InvalidThreshold {
            key: "shift_min_gain",
            value: 2.0,
        }
        .into();
        assert!(matches!(err, ApiError::Config(_)));
    }
}
