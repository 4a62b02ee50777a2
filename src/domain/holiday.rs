// ==========================================
// 司法休假优化系统 - 节假日领域模型
// ==========================================
// 外部只读数据: 由日历协作方加载,引擎内不修改
// ==========================================

use crate::domain::types::HolidayCategory;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ==========================================
// Holiday - 节假日
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub date: NaiveDate,            // 日期 (序列化为 YYYY-MM-DD)
    pub name: String,               // 名称
    pub category: HolidayCategory,  // 类别
}

impl Holiday {
    pub fn new(date: NaiveDate, name: impl Into<String>, category: HolidayCategory) -> Self {
        Self {
            date,
            name: name.into(),
            category,
        }
    }

    pub fn national(date: NaiveDate, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::National)
    }

    pub fn judicial(date: NaiveDate, name: impl Into<String>) -> Self {
        Self::new(date, name, HolidayCategory::Judicial)
    }

    pub fn recess(date: NaiveDate) -> Self {
        Self::new(date, "Recesso Forense", HolidayCategory::Recess)
    }
}
