// ==========================================
// 司法休假优化系统 - 建议领域模型
// ==========================================
// 生命周期: 每次聚合运行创建一次,评分后不再修改,不落库
// ==========================================

use crate::domain::date_range::DateRange;
use crate::domain::period::VacationPeriod;
use crate::domain::types::RecommendationType;
use serde::{Deserialize, Serialize};

// ==========================================
// Recommendation - 休假调整建议
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: RecommendationType,
    pub title: String,
    pub description: String,
    pub suggested_date_range: DateRange,
    pub efficiency_gain: f64,
    pub days_changed: i64,
    /// 仅 split / optimal_fraction 携带
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractioned_periods: Option<Vec<VacationPeriod>>,
    pub strategic_score: f64,
}

impl Recommendation {
    /// 建议涉及的全部区间（分段建议取各子区间,否则取建议区间）
    pub fn covered_ranges(&self) -> Vec<DateRange> {
        match (&self.fractioned_periods, self.kind) {
            (Some(periods), RecommendationType::OptimalFraction) => {
                periods.iter().map(|p| p.range()).collect()
            }
            _ => vec![self.suggested_date_range],
        }
    }
}

// ==========================================
// FractionedSelection - 全年分段选择结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractionedSelection {
    /// 按日期排序的分段
    pub periods: Vec<VacationPeriod>,
    /// 所有分段合并后的效率
    pub combined_efficiency: f64,
    /// 相对等长连续参照区间的效率增益
    pub efficiency_gain: f64,
    /// 参照区间（当年 6 月 1 日起,等总长度）
    pub reference_period: VacationPeriod,
    /// 同总天数下的理论效率上限
    pub theoretical_max: f64,
}

impl FractionedSelection {
    pub fn total_days(&self) -> i64 {
        self.periods.iter().map(|p| p.total_days).sum()
    }

    pub fn total_work_days(&self) -> i64 {
        self.periods.iter().map(|p| p.work_days).sum()
    }

    /// 覆盖首个分段起点到最后分段终点
    pub fn span(&self) -> Option<DateRange> {
        let first = self.periods.first()?;
        let last = self.periods.last()?;
        Some(DateRange::new_unchecked(first.start, last.end))
    }
}
