// ==========================================
// 司法休假优化系统 - 日历协作方接口
// ==========================================
// 职责: 定义引擎所需的节假日查询接口 + 内存实现
// 红线: 日历加载后只读,引擎不得修改
// ==========================================
// 注: 真实节假日数据的构造/抓取属于外部协作方
// ==========================================

pub mod error;
pub mod memory;

pub use error::{CalendarError, CalendarResult};
pub use memory::InMemoryCalendar;

use crate::domain::date_range::is_weekend_day;
use crate::domain::Holiday;
use chrono::NaiveDate;

// ==========================================
// HolidayCalendar Trait
// ==========================================
// 实现者: InMemoryCalendar
// 约束: 以不可变值注入每个引擎,可被多线程共享读取
pub trait HolidayCalendar: Send + Sync {
    /// 查询某日是否为节假日
    fn is_holiday(&self, date: NaiveDate) -> Option<&Holiday>;

    /// 查询某日是否为周末（周六/周日）
    fn is_weekend(&self, date: NaiveDate) -> bool {
        is_weekend_day(date)
    }

    /// 区间内节假日（含首尾,按日期升序）
    fn holidays_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<&Holiday>;

    /// 非工作日 = 节假日 ∪ 周末
    fn is_non_work_day(&self, date: NaiveDate) -> bool {
        self.is_holiday(date).is_some() || self.is_weekend(date)
    }
}
