// ==========================================
// 司法休假优化系统 - 日期区间
// ==========================================
// 不变量: start ≤ end
// 倒置区间 (start > end) 是显式错误状态,不做静默归一化
// ==========================================

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 闭区间 [start, end]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// 创建区间（校验 start ≤ end）
    ///
    /// # 返回
    /// - Some(DateRange): 合法区间
    /// - None: 倒置区间
    pub fn new(start: NaiveDate, end: NaiveDate) -> Option<Self> {
        if start > end {
            return None;
        }
        Some(Self { start, end })
    }

    /// 创建区间（不校验,允许表达倒置状态）
    pub fn new_unchecked(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    /// 交换首尾（用于倒置纠正建议）
    pub fn swapped(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
        }
    }

    /// 区间天数（含首尾）；倒置区间返回 0
    pub fn days(&self) -> i64 {
        if self.is_inverted() {
            return 0;
        }
        (self.end - self.start).num_days() + 1
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 两个区间是否有交集（任一倒置则视为不相交）
    pub fn overlaps(&self, other: &DateRange) -> bool {
        if self.is_inverted() || other.is_inverted() {
            return false;
        }
        self.start <= other.end && self.end >= other.start
    }

    /// 交集天数
    pub fn overlap_days(&self, other: &DateRange) -> i64 {
        if !self.overlaps(other) {
            return 0;
        }
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        ((end - start).num_days() + 1).max(0)
    }

    /// 逐日迭代（倒置区间为空迭代）
    pub fn iter_days(&self) -> impl Iterator<Item = NaiveDate> {
        let start = self.start;
        (0..self.days()).map(move |offset| start + Duration::days(offset))
    }
}

// ==========================================
// 星期辅助函数
// ==========================================

/// 周六/周日
pub fn is_weekend_day(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// 周二~周四
pub fn is_midweek(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Tue | Weekday::Wed | Weekday::Thu)
}

/// 两个日期之间的日历天数 (b - a)
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    (b - a).num_days()
}
