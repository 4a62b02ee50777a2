// ==========================================
// 司法休假优化系统 - 休假区间领域模型
// ==========================================
// 不变量:
// - total_days = work_days + weekend_days + holiday_days
// - efficiency ∈ [0, 1]
// - is_valid ⇔ total_days ≥ 最短休假天数 (默认 5)
// - 同时是节假日和周末的日期计为 holiday,不计为 weekend
// ==========================================

use crate::domain::date_range::DateRange;
use crate::domain::types::EfficiencyRating;
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// 无效原因: 天数不足
pub const REASON_TOO_SHORT: &str = "too_short";
/// 无效原因: 日期倒置
pub const REASON_INVERTED: &str = "inverted";

// ==========================================
// DayBreakdown - 日构成统计
// ==========================================
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayBreakdown {
    pub total_days: i64,
    pub work_days: i64,
    pub weekend_days: i64,
    pub holiday_days: i64,
    /// 落在周一~周五的节假日数（供惩罚类评分策略使用）
    pub holidays_on_weekdays: i64,
}

impl DayBreakdown {
    pub fn non_work_days(&self) -> i64 {
        self.weekend_days + self.holiday_days
    }
}

// ==========================================
// VacationPeriod - 休假区间（派生,计算后不可变）
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VacationPeriod {
    pub start: NaiveDate,
    pub end: NaiveDate,
    pub total_days: i64,
    pub work_days: i64,
    pub weekend_days: i64,
    pub holiday_days: i64,
    pub efficiency: f64,
    pub rating: EfficiencyRating,
    pub is_valid: bool,
    #[serde(default)]
    pub invalid_reason: Option<String>,
}

impl VacationPeriod {
    /// 由统计结果组装休假区间
    ///
    /// # 参数
    /// - breakdown: 日构成
    /// - efficiency: 评分策略给出的效率（会被夹到 [0,1]）
    /// - min_days: 最短合法天数
    pub fn from_breakdown(
        start: NaiveDate,
        end: NaiveDate,
        breakdown: DayBreakdown,
        efficiency: f64,
        min_days: i64,
    ) -> Self {
        let efficiency = if efficiency.is_finite() {
            efficiency.clamp(0.0, 1.0)
        } else {
            0.0
        };
        let is_valid = breakdown.total_days >= min_days;

        Self {
            start,
            end,
            total_days: breakdown.total_days,
            work_days: breakdown.work_days,
            weekend_days: breakdown.weekend_days,
            holiday_days: breakdown.holiday_days,
            efficiency,
            rating: EfficiencyRating::from_efficiency(efficiency),
            is_valid,
            invalid_reason: if is_valid {
                None
            } else {
                Some(REASON_TOO_SHORT.to_string())
            },
        }
    }

    /// 倒置区间的标记对象（计数全 0,效率 0,无效）
    pub fn inverted(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start,
            end,
            total_days: 0,
            work_days: 0,
            weekend_days: 0,
            holiday_days: 0,
            efficiency: 0.0,
            rating: EfficiencyRating::Low,
            is_valid: false,
            invalid_reason: Some(REASON_INVERTED.to_string()),
        }
    }

    pub fn range(&self) -> DateRange {
        DateRange::new_unchecked(self.start, self.end)
    }

    pub fn is_inverted(&self) -> bool {
        self.start > self.end
    }

    pub fn non_work_days(&self) -> i64 {
        self.weekend_days + self.holiday_days
    }

    pub fn starts_on(&self, weekday: Weekday) -> bool {
        self.start.weekday() == weekday
    }

    pub fn ends_on(&self, weekday: Weekday) -> bool {
        self.end.weekday() == weekday
    }

    pub fn overlaps(&self, other: &VacationPeriod) -> bool {
        self.range().overlaps(&other.range())
    }
}
