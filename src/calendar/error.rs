// ==========================================
// 司法休假优化系统 - 日历错误类型
// ==========================================
// 工具: thiserror 派生宏
// ==========================================

use thiserror::Error;

/// 日历加载错误
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("日历文件读取失败 ({path}): {source}")]
    FileRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("日历 JSON 解析失败: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("日期格式错误 (第 {index} 条): 期望 YYYY-MM-DD，实际 {value}")]
    InvalidDate { index: usize, value: String },

    #[error("节假日类别错误 (第 {index} 条): {message}")]
    InvalidCategory { index: usize, message: String },
}

pub type CalendarResult<T> = Result<T, CalendarError>;
