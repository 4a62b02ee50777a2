// ==========================================
// 司法休假优化系统 - 拆分优化器
// ==========================================
// 职责: 在区间内部寻找切分点,把一个区间分成两个更优的子区间
// 输入: VacationPeriod（≥ split_min_days 天）
// 输出: Option<SplitResult>
// ==========================================
// 红线: 两个子区间都必须合法（≥ 5 天）且都含工作日
// 红线: 非工作日分布度 > 阈值 才可入选
// 平局: 后出现的等值切分点覆盖先出现的
// ==========================================

use crate::calendar::HolidayCalendar;
use crate::domain::VacationPeriod;
use crate::engine::evaluator::PeriodEvaluator;
use chrono::{Datelike, Duration, Weekday};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const SECOND_STARTS_ON_WEEKEND: f64 = -0.10;
const FIRST_ENDS_FRIDAY: f64 = 0.05;
const SECOND_STARTS_MONDAY: f64 = 0.05;
const FLEXIBILITY_BONUS: f64 = 0.02;

// ==========================================
// SplitResult - 拆分结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SplitResult {
    pub first: VacationPeriod,
    pub second: VacationPeriod,
    /// 含加成的有效效率
    pub combined_efficiency: f64,
    /// 按长度加权的原始效率
    pub weighted_efficiency: f64,
    /// min(非工作日) / max(非工作日)
    pub distribution_score: f64,
    /// 第一段最后一天相对起点的偏移
    pub offset: i64,
}

impl SplitResult {
    pub fn periods(&self) -> Vec<VacationPeriod> {
        vec![self.first.clone(), self.second.clone()]
    }
}

/// 非工作日分布度
pub fn distribution_score(first: &VacationPeriod, second: &VacationPeriod) -> f64 {
    let a = first.non_work_days();
    let b = second.non_work_days();
    let max = a.max(b);
    if max <= 0 {
        return 0.0;
    }
    a.min(b) as f64 / max as f64
}

// ==========================================
// SplitOptimizer - 拆分优化器
// ==========================================
pub struct SplitOptimizer<C>
where
    C: HolidayCalendar,
{
    evaluator: PeriodEvaluator<C>,
    min_total_days: i64,
    min_distribution: f64,
}

impl<C> SplitOptimizer<C>
where
    C: HolidayCalendar,
{
    /// # 参数
    /// - evaluator: 区间评估器
    /// - min_total_days: 可拆分的最短区间
    /// - min_distribution: 分布度阈值（严格大于）
    pub fn new(evaluator: PeriodEvaluator<C>, min_total_days: i64, min_distribution: f64) -> Self {
        Self {
            evaluator,
            min_total_days,
            min_distribution,
        }
    }

    /// 搜索最佳切分点
    #[instrument(skip(self, period), fields(start = %period.start, end = %period.end, total = period.total_days))]
    pub fn optimize(&self, period: &VacationPeriod) -> Option<SplitResult> {
        if period.is_inverted() || period.total_days < self.min_total_days {
            return None;
        }

        let min_side = self.evaluator.min_period_days();
        let first_offset = min_side - 1;
        let last_offset = period.total_days - min_side - 1;

        let mut best: Option<SplitResult> = None;
        let mut best_efficiency = 0.0;

        for offset in first_offset..=last_offset {
            let first_end = period.start + Duration::days(offset);
            let first = self.evaluator.evaluate(period.start, first_end);
            let second = self.evaluator.evaluate(first_end + Duration::days(1), period.end);

            if !first.is_valid || !second.is_valid {
                continue;
            }
            if first.work_days == 0 || second.work_days == 0 {
                continue;
            }

            let weighted = (first.efficiency * first.total_days as f64
                + second.efficiency * second.total_days as f64)
                / period.total_days as f64;
            let effective = weighted + split_bonus(&first, &second);
            let distribution = distribution_score(&first, &second);

            if effective >= best_efficiency && distribution > self.min_distribution {
                best_efficiency = effective;
                best = Some(SplitResult {
                    first,
                    second,
                    combined_efficiency: effective,
                    weighted_efficiency: weighted,
                    distribution_score: distribution,
                    offset,
                });
            }
        }

        debug!(
            found = best.is_some(),
            offset = best.as_ref().map(|b| b.offset),
            "拆分搜索完成"
        );
        best
    }
}

fn split_bonus(first: &VacationPeriod, second: &VacationPeriod) -> f64 {
    let mut bonus = FLEXIBILITY_BONUS;
    if matches!(second.start.weekday(), Weekday::Sat | Weekday::Sun) {
        bonus += SECOND_STARTS_ON_WEEKEND;
    }
    if first.end.weekday() == Weekday::Fri {
        bonus += FIRST_ENDS_FRIDAY;
    }
    if second.start.weekday() == Weekday::Mon {
        bonus += SECOND_STARTS_MONDAY;
    }
    bonus
}
